//! Directional embedding marks and the small helpers built on them.

/// LEFT-TO-RIGHT EMBEDDING (U+202A).
pub const LTR_EMBED: char = '\u{202A}';
/// RIGHT-TO-LEFT EMBEDDING (U+202B).
pub const RTL_EMBED: char = '\u{202B}';
/// POP DIRECTIONAL FORMATTING (U+202C).
pub const POP: char = '\u{202C}';

const LTR_TOKEN: &str = "[LTR]";
const RTL_TOKEN: &str = "[RTL]";
const POP_TOKEN: &str = "[POP]";

/// Text direction of an embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// The mark that opens an embedding in this direction.
    #[must_use]
    pub fn embed_char(self) -> char {
        match self {
            Self::Ltr => LTR_EMBED,
            Self::Rtl => RTL_EMBED,
        }
    }
}

/// One of the three recognized embedding marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Opens an embedding (`LTR_EMBED` or `RTL_EMBED`).
    Embed(Direction),
    /// Closes the innermost open embedding.
    Pop,
}

impl Mark {
    /// Classify a char, returning `None` for anything that is not a mark.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            LTR_EMBED => Some(Self::Embed(Direction::Ltr)),
            RTL_EMBED => Some(Self::Embed(Direction::Rtl)),
            POP => Some(Self::Pop),
            _ => None,
        }
    }

    /// The code point for this mark.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Embed(direction) => direction.embed_char(),
            Self::Pop => POP,
        }
    }
}

/// Returns `true` if `ch` is `LTR_EMBED`, `RTL_EMBED` or `POP`.
///
/// # Example
///
/// ```
/// use strand_bidi::is_embedding_mark;
///
/// assert!(is_embedding_mark('\u{202B}'));
/// assert!(!is_embedding_mark('a'));
/// ```
#[must_use]
pub fn is_embedding_mark(ch: char) -> bool {
    matches!(ch, LTR_EMBED | RTL_EMBED | POP)
}

/// Wrap `text` in a left-to-right embedding.
#[must_use]
pub fn wrap_ltr(text: &str) -> String {
    wrap_direction(text, Direction::Ltr)
}

/// Wrap `text` in a right-to-left embedding.
#[must_use]
pub fn wrap_rtl(text: &str) -> String {
    wrap_direction(text, Direction::Rtl)
}

/// Wrap `text` in an embedding of the given direction, closed by `POP`.
#[must_use]
pub fn wrap_direction(text: &str, direction: Direction) -> String {
    let mut out = String::with_capacity(text.len() + 6);
    out.push(direction.embed_char());
    out.push_str(text);
    out.push(POP);
    out
}

/// Replace every mark with a readable token (`[LTR]`, `[RTL]`, `[POP]`).
///
/// # Example
///
/// ```
/// use strand_bidi::{embedded_debug_string, wrap_rtl};
///
/// assert_eq!(embedded_debug_string(&wrap_rtl("abc")), "[RTL]abc[POP]");
/// ```
#[must_use]
pub fn embedded_debug_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            LTR_EMBED => out.push_str(LTR_TOKEN),
            RTL_EMBED => out.push_str(RTL_TOKEN),
            POP => out.push_str(POP_TOKEN),
            _ => out.push(ch),
        }
    }
    out
}

/// Inverse of [`embedded_debug_string`]: turn tokens back into marks.
#[must_use]
pub fn parse_debug_string(text: &str) -> String {
    text.replace(LTR_TOKEN, "\u{202A}")
        .replace(RTL_TOKEN, "\u{202B}")
        .replace(POP_TOKEN, "\u{202C}")
}

/// Remove all embedding marks, leaving only visible content.
#[must_use]
pub fn strip_embedding_marks(text: &str) -> String {
    text.chars().filter(|&ch| !is_embedding_mark(ch)).collect()
}
