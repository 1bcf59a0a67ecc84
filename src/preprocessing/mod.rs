//! Pure data-transformation functions.
//!
//! Nothing here touches I/O or global state: every function maps its input
//! to a fresh output, and malformed input comes back as an [`Error`].
//!
//! [`Error`]: crate::error::Error

mod clean;
mod literal;
mod numeric;
mod structure;
mod text;
mod value;

pub use clean::{fill_missing, remove_duplicates, remove_missing};
pub use literal::{LiteralError, parse_literal};
pub use numeric::{clip, log_transform, normalize, standardize, to_integers};
pub use structure::{flatten, shuffle};
pub use text::{remove_punctuation, remove_stopwords, tokenize};
pub use value::{Value, parse_list_literal};
