//! `{{key}}` placeholder substitution.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::source::StringSource;

/// Placeholder values keyed by name (without braces).
pub type FillValues = HashMap<String, StringSource>;

/// Regex to match `{{key}}` placeholders. The key may not contain braces.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").unwrap());

/// Placeholder substitution error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FillError {
    /// A placeholder in the template has no value.
    #[error("Missing value for placeholder {{{{{key}}}}}")]
    MissingValue {
        /// Placeholder key without braces.
        key: String,
    },
}

/// Replace `{{key}}` placeholders in `template` with entries from `values`.
///
/// The template and each used value are resolved once per call. Values are
/// inserted as-is and never rescanned for placeholders. Placeholders without
/// a value are left in place.
///
/// # Example
///
/// ```
/// use strand_fill::{FillValues, StringSource, fill_in};
///
/// let mut values = FillValues::new();
/// values.insert("name".to_owned(), "Alice".into());
/// values.insert("count".to_owned(), 3.into());
///
/// let template = StringSource::from("{{name}} has {{count}} {{things}}");
/// assert_eq!(fill_in(&template, &values), "Alice has 3 {{things}}");
/// ```
#[must_use]
pub fn fill_in(template: &StringSource, values: &FillValues) -> String {
    substitute(template, values, |_| {})
}

/// Like [`fill_in`], but every placeholder must have a value.
///
/// # Errors
///
/// Returns [`FillError::MissingValue`] naming the first placeholder with no
/// entry in `values`.
pub fn fill_in_strict(template: &StringSource, values: &FillValues) -> Result<String, FillError> {
    let mut missing: Option<String> = None;
    let filled = substitute(template, values, |key| {
        if missing.is_none() {
            missing = Some(key.to_owned());
        }
    });
    match missing {
        Some(key) => Err(FillError::MissingValue { key }),
        None => Ok(filled),
    }
}

fn substitute(
    template: &StringSource,
    values: &FillValues,
    mut on_missing: impl FnMut(&str),
) -> String {
    let template = template.resolve();
    let mut resolved: HashMap<&str, Cow<'_, str>> = HashMap::new();

    PLACEHOLDER_RE
        .replace_all(&template, |caps: &Captures<'_>| {
            let key = caps.get(1).map_or("", |m| m.as_str());
            let Some((name, value)) = values.get_key_value(key) else {
                tracing::debug!(key, "No value for placeholder");
                on_missing(key);
                return caps[0].to_owned();
            };
            resolved
                .entry(name.as_str())
                .or_insert_with(|| value.resolve())
                .to_string()
        })
        .into_owned()
}

/// Uppercase the first char of `text`.
///
/// # Example
///
/// ```
/// use strand_fill::capitalize;
///
/// assert_eq!(capitalize("hello world"), "Hello world");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn values(pairs: &[(&str, &str)]) -> FillValues {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), StringSource::from(*value)))
            .collect()
    }

    #[test]
    fn test_fill_in_replaces_placeholders() {
        let template = StringSource::from("{{name}} is {{age}} years old");
        let values = values(&[("name", "Bob"), ("age", "43")]);
        assert_eq!(fill_in(&template, &values), "Bob is 43 years old");
    }

    #[test]
    fn test_fill_in_repeated_placeholder() {
        let template = StringSource::from("{{x}} + {{x}} = {{y}}");
        let values = values(&[("x", "1"), ("y", "2")]);
        assert_eq!(fill_in(&template, &values), "1 + 1 = 2");
    }

    #[test]
    fn test_fill_in_keeps_unknown_placeholders() {
        let template = StringSource::from("{{known}} {{unknown}}");
        let values = values(&[("known", "ok")]);
        assert_eq!(fill_in(&template, &values), "ok {{unknown}}");
    }

    #[test]
    fn test_fill_in_does_not_rescan_values() {
        let template = StringSource::from("value={{output}}");
        let values = values(&[("output", "injected {{id}}"), ("id", "123")]);
        assert_eq!(fill_in(&template, &values), "value=injected {{id}}");
    }

    #[test]
    fn test_fill_in_ignores_malformed_braces() {
        let template = StringSource::from("{{}} {{a{b}} {{open");
        let values = values(&[("a{b", "x"), ("", "y")]);
        assert_eq!(fill_in(&template, &values), "{{}} {{a{b}} {{open");
    }

    #[test]
    fn test_fill_in_reactive_template_and_value() {
        let template = StringSource::reactive(|| "Hi {{who}}".to_owned());
        let mut values = FillValues::new();
        values.insert("who".to_owned(), StringSource::reactive(|| "there".to_owned()));
        assert_eq!(fill_in(&template, &values), "Hi there");
    }

    #[test]
    fn test_fill_in_resolves_each_value_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let getter_calls = Arc::clone(&calls);
        let mut values = FillValues::new();
        values.insert(
            "v".to_owned(),
            StringSource::reactive(move || {
                getter_calls.fetch_add(1, Ordering::SeqCst);
                "v".to_owned()
            }),
        );
        let template = StringSource::from("{{v}}{{v}}{{v}}");
        assert_eq!(fill_in(&template, &values), "vvv");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fill_in_numeric_values() {
        let mut values = FillValues::new();
        values.insert("n".to_owned(), 7_usize.into());
        values.insert("ratio".to_owned(), 0.25_f64.into());
        let template = StringSource::from("{{n}} at {{ratio}}");
        assert_eq!(fill_in(&template, &values), "7 at 0.25");
    }

    #[test]
    fn test_fill_in_strict_reports_first_missing_key() {
        let template = StringSource::from("{{a}} {{b}} {{c}}");
        let values = values(&[("a", "1")]);
        let err = fill_in_strict(&template, &values).unwrap_err();
        assert_eq!(err, FillError::MissingValue { key: "b".to_owned() });
        assert_eq!(err.to_string(), "Missing value for placeholder {{b}}");
    }

    #[test]
    fn test_fill_in_strict_succeeds_when_complete() {
        let template = StringSource::from("{{a}}-{{b}}");
        let values = values(&[("a", "1"), ("b", "2")]);
        assert_eq!(fill_in_strict(&template, &values).unwrap(), "1-2");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("word"), "Word");
        assert_eq!(capitalize("Word"), "Word");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize("ßa"), "SSa");
        assert_eq!(capitalize("1st"), "1st");
        assert_eq!(capitalize(""), "");
    }
}
