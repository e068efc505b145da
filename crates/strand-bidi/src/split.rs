//! Embedding-preserving string splitting.

use regex::Regex;

use crate::slice::{Slicer, slice_range};
use crate::stack::StackCursor;

/// What [`embedded_split`] splits on.
#[derive(Debug, Clone)]
pub enum Separator {
    /// A literal substring.
    Literal(String),
    /// A regular expression.
    Pattern(Regex),
}

impl From<&str> for Separator {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_owned())
    }
}

impl From<String> for Separator {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<Regex> for Separator {
    fn from(value: Regex) -> Self {
        Self::Pattern(value)
    }
}

impl Separator {
    /// First match in `source[from..]`, as absolute byte offsets.
    fn find_in_tail(&self, source: &str, from: usize) -> Option<(usize, usize)> {
        let tail = &source[from..];
        match self {
            Self::Literal(literal) => tail
                .find(literal.as_str())
                .map(|index| (from + index, from + index + literal.len())),
            Self::Pattern(pattern) => pattern
                .find(tail)
                .map(|found| (from + found.start(), from + found.end())),
        }
    }

    /// Next split point at or after `offset`.
    ///
    /// An empty match at `offset` itself or at the end of `source` does not
    /// split; the search resumes one char further on.
    fn next_split(&self, source: &str, offset: usize) -> Option<(usize, usize)> {
        let mut from = offset;
        loop {
            let (start, end) = self.find_in_tail(source, from)?;
            if start < end || (start > offset && start < source.len()) {
                return Some((start, end));
            }
            let step = source[start..].chars().next()?.len_utf8();
            from = start + step;
        }
    }
}

impl Slicer {
    /// Split `source` on `separator`, slicing every segment with
    /// [`Slicer::slice`] semantics.
    ///
    /// Without a separator the result is `source` as its only element. With
    /// `limit`, at most that many segments are produced.
    pub fn split(
        &self,
        source: &str,
        separator: Option<&Separator>,
        limit: Option<usize>,
    ) -> Vec<String> {
        let Some(separator) = separator else {
            return vec![source.to_owned()];
        };

        let limit = limit.unwrap_or(usize::MAX);
        let mut segments = Vec::new();
        let mut cursor = StackCursor::default();
        let mut offset = 0;

        while segments.len() < limit {
            if let Some((match_start, match_end)) = separator.next_split(source, offset) {
                segments.push(slice_range(source, offset, match_start, &mut cursor));
                offset = match_end;
            } else {
                segments.push(slice_range(source, offset, source.len(), &mut cursor));
                break;
            }
        }

        tracing::debug!(segments = segments.len(), "Split embedded string");
        segments
    }
}

/// Split `source` on `separator`, keeping each segment's embedding context.
///
/// # Example
///
/// ```
/// use regex::Regex;
/// use strand_bidi::{Separator, embedded_debug_string, embedded_split};
///
/// let text = "\u{202A}one \u{202B}two\u{202C}\u{202C}";
/// let separator = Separator::from(Regex::new(" +").unwrap());
/// let parts: Vec<String> = embedded_split(text, Some(&separator), None)
///     .iter()
///     .map(|part| embedded_debug_string(part))
///     .collect();
/// assert_eq!(parts, ["[LTR]one[POP]", "[RTL]two[POP]"]);
/// ```
#[must_use]
pub fn embedded_split(
    source: &str,
    separator: Option<&Separator>,
    limit: Option<usize>,
) -> Vec<String> {
    Slicer::lenient().split(source, separator, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::{embedded_debug_string, parse_debug_string, strip_embedding_marks};
    use crate::slice::embedded_slice;
    use pretty_assertions::assert_eq;

    fn debug_split(source: &str, separator: &Separator, limit: Option<usize>) -> Vec<String> {
        embedded_split(source, Some(separator), limit)
            .iter()
            .map(|segment| embedded_debug_string(segment))
            .collect()
    }

    fn spaces() -> Separator {
        Separator::from(Regex::new(" +").unwrap())
    }

    #[test]
    fn test_split_without_separator_returns_source() {
        assert_eq!(embedded_split("abc", None, None), vec!["abc".to_owned()]);
    }

    #[test]
    fn test_split_words_keeps_direction() {
        let source = "\u{202A}Hello  there, \u{202B}How are you\u{202C} doing?\u{202C}";
        assert_eq!(
            debug_split(source, &spaces(), None),
            vec![
                "[LTR]Hello[POP]",
                "[LTR]there,[POP]",
                "[RTL]How[POP]",
                "[RTL]are[POP]",
                "[RTL]you[POP]",
                "[LTR]doing?[POP]",
            ]
        );
    }

    #[test]
    fn test_split_literal_separator() {
        let source = parse_debug_string("[RTL]a,b[POP],c");
        assert_eq!(
            debug_split(&source, &Separator::from(","), None),
            vec!["[RTL]a[POP]", "[RTL]b[POP]", "c"]
        );
    }

    #[test]
    fn test_split_plain_text_matches_str_split() {
        let source = "a,b,,c,";
        let expected: Vec<String> = source.split(',').map(str::to_owned).collect();
        assert_eq!(embedded_split(source, Some(&Separator::from(",")), None), expected);
    }

    #[test]
    fn test_split_trailing_separator_yields_empty_segment() {
        let source = parse_debug_string("[LTR]a b [POP]");
        assert_eq!(debug_split(&source, &Separator::from(" "), None), vec![
            "[LTR]a[POP]",
            "[LTR]b[POP]",
            "",
        ]);
    }

    #[test]
    fn test_split_limit_truncates() {
        let source = "a b c d";
        let separator = Separator::from(" ");
        assert_eq!(embedded_split(source, Some(&separator), Some(2)), vec!["a", "b"]);
        assert_eq!(embedded_split(source, Some(&separator), Some(10)).len(), 4);
        assert!(embedded_split(source, Some(&separator), Some(0)).is_empty());
    }

    #[test]
    fn test_split_empty_literal_splits_chars() {
        assert_eq!(
            embedded_split("abc", Some(&Separator::from("")), None),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_split_zero_width_pattern_does_not_loop() {
        let separator = Separator::from(Regex::new(" *").unwrap());
        assert_eq!(embedded_split("a b", Some(&separator), None), vec!["a", "b"]);
    }

    #[test]
    fn test_split_pattern_anchors_at_remaining_text() {
        // `^` matches at the start of what is left after each separator
        let separator = Separator::from(Regex::new("^a").unwrap());
        assert_eq!(embedded_split("aab", Some(&separator), None), vec!["", "", "b"]);
        assert_eq!(embedded_split("bab", Some(&separator), None), vec!["bab"]);
    }

    #[test]
    fn test_split_multibyte_separator() {
        let source = parse_debug_string("[RTL]אחד—שניים[POP]");
        assert_eq!(debug_split(&source, &Separator::from("—"), None), vec![
            "[RTL]אחד[POP]",
            "[RTL]שניים[POP]",
        ]);
    }

    #[test]
    fn test_split_content_matches_plain_split() {
        let source = parse_debug_string("[LTR]one two [RTL]three four[POP] five[POP]");
        let stripped = strip_embedding_marks(&source);
        let expected: Vec<&str> = stripped.split(' ').collect();
        let actual: Vec<String> = embedded_split(&source, Some(&Separator::from(" ")), None)
            .iter()
            .map(|segment| strip_embedding_marks(segment))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_split_matches_independent_slices() {
        // Carrying the stack across segments must agree with slicing each
        // segment from scratch.
        let source = parse_debug_string("[LTR]ab [RTL]cd [LTR]ef[POP] gh[POP] ij[POP]");
        let separator = Separator::from(" ");
        let chars: Vec<char> = source.chars().collect();
        let mut expected = Vec::new();
        let mut start = 0;
        for (index, ch) in chars.iter().enumerate() {
            if *ch == ' ' {
                let end = isize::try_from(index).unwrap();
                expected.push(embedded_slice(&source, start, Some(end)));
                start = index + 1;
            }
        }
        expected.push(embedded_slice(&source, start, None));
        assert_eq!(embedded_split(&source, Some(&separator), None), expected);
    }
}
