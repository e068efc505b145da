//! Named placeholder substitution for Strand.
//!
//! Templates use `{{key}}` placeholders. Both the template and the values can
//! be fixed text or a getter ([`StringSource::Reactive`]) that is read when
//! the template is filled.
//!
//! # Example
//!
//! ```
//! use strand_fill::{FillValues, StringSource, capitalize, fill_in};
//!
//! let mut values = FillValues::new();
//! values.insert("item".to_owned(), StringSource::reactive(|| "apple".to_owned()));
//!
//! let filled = fill_in(&"{{item}} pie".into(), &values);
//! assert_eq!(capitalize(&filled), "Apple pie");
//! ```

mod fill;
mod source;

pub use fill::{FillError, FillValues, capitalize, fill_in, fill_in_strict};
pub use source::{Getter, StringSource};
