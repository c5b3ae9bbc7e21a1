//! Weak password variant pattern library
//!
//! This library builds a single anchored matching expression that matches a
//! password together with its trivial weak variants: the password without
//! its trailing digits, the first half of a doubled word, the reversed
//! password, and any candidates produced by caller-supplied builders.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable delivery over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WEAK_VARIANTS`: Comma-separated built-in checks read by
//!   `options_from_env()` (`number-suffix`, `doubled-word`, `reversed-word`)
//!
//! # Example
//!
//! ```rust
//! use pwd_pattern::{match_password_expression, WordListOptions};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let options = WordListOptions::new()
//!     .with_number_suffix(true)
//!     .with_reversed_word(true);
//!
//! let password = SecretString::new("Password1".to_string().into());
//! let pattern = match_password_expression(Some(&password), Some(&options))
//!     .expect("Failed to build pattern");
//!
//! assert_eq!(pattern.expose_secret(), "^Password1|Password|1drowssaP$");
//! ```

// Internal modules
mod builder;
mod director;
mod error;
mod escape;
mod generators;
mod options;
mod settings;

// Public API
pub use builder::CandidateBuilder;
pub use director::match_password_expression;
pub use error::{BuilderError, PatternError, SettingsError};
pub use escape::{escape, METACHARACTERS};
pub use generators::{
    doubled_word_generator, number_suffix_generator, reversed_word_generator, GeneratorResult,
};
pub use options::WordListOptions;
pub use settings::{options_from_env, parse_checks, SettingsStore, WEAK_VARIANTS_ENV};

#[cfg(feature = "async")]
pub use director::{match_password_expression_tx, DEBOUNCE};
