//! Number suffix generator - strips trailing digits.

use secrecy::{ExposeSecret, SecretString};
use super::GeneratorResult;

/// Removes the maximal run of trailing ASCII digits from the password.
///
/// # Returns
/// - `Some(stem)` if the password ends in digits preceded by something else
/// - `None` if there are no trailing digits or the password is all digits
pub fn number_suffix_generator(password: &SecretString) -> GeneratorResult {
    let pwd = password.expose_secret();
    let stem = pwd.trim_end_matches(|c: char| c.is_ascii_digit());
    if stem.len() == pwd.len() || stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}
