//! String sources: literal text or a getter evaluated on demand.

use std::borrow::Cow;
use std::fmt;

/// Getter producing the current value of a reactive source.
pub type Getter = Box<dyn Fn() -> String + Send + Sync>;

/// A template or value that is either fixed text or read from a getter.
pub enum StringSource {
    /// Fixed text.
    Literal(String),
    /// Text read each time the source is resolved.
    Reactive(Getter),
}

impl StringSource {
    /// Create a reactive source from a getter.
    pub fn reactive(getter: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self::Reactive(Box::new(getter))
    }

    /// Create a literal source from anything displayable (numbers, etc.).
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Literal(value.to_string())
    }

    /// Current text of the source.
    #[must_use]
    pub fn resolve(&self) -> Cow<'_, str> {
        match self {
            Self::Literal(text) => Cow::Borrowed(text),
            Self::Reactive(getter) => Cow::Owned(getter()),
        }
    }
}

impl fmt::Debug for StringSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Reactive(_) => f.write_str("Reactive(..)"),
        }
    }
}

impl From<&str> for StringSource {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_owned())
    }
}

impl From<String> for StringSource {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StringSource {
                fn from(value: $ty) -> Self {
                    Self::display(value)
                }
            }
        )*
    };
}

impl_from_display!(i32, i64, u32, u64, usize, f32, f64);
