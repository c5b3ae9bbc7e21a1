//! Reversed word generator.

use secrecy::{ExposeSecret, SecretString};
use super::GeneratorResult;

/// Reverses the password character by character. Never declines.
pub fn reversed_word_generator(password: &SecretString) -> GeneratorResult {
    Some(password.expose_secret().chars().rev().collect())
}
