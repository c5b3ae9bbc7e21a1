//! Doubled word generator - halves a word typed twice.

use secrecy::{ExposeSecret, SecretString};
use super::GeneratorResult;

/// Returns the first half of the password when both halves are identical.
///
/// Halves are compared character by character, not byte by byte.
pub fn doubled_word_generator(password: &SecretString) -> GeneratorResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.is_empty() || chars.len() % 2 != 0 {
        return None;
    }

    let (first, second) = chars.split_at(chars.len() / 2);
    if first != second {
        return None;
    }
    Some(first.iter().collect())
}
