//! Weak variant generators
//!
//! Each generator inspects the original password and proposes at most one
//! candidate the password could have been derived from.

mod doubled_word;
mod number_suffix;
mod reversed_word;

pub use doubled_word::doubled_word_generator;
pub use number_suffix::number_suffix_generator;
pub use reversed_word::reversed_word_generator;

/// Result type for generator functions.
/// - `Some(candidate)` - Generator produced a candidate
/// - `None` - Generator declined
pub type GeneratorResult = Option<String>;
