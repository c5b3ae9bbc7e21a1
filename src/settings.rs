//! Named settings management
//!
//! Applications that apply different weak variant policies to different
//! forms keep them in a `SettingsStore` they own. The built-in checks can
//! also be configured from the environment.

use std::collections::HashMap;

use crate::error::SettingsError;
use crate::options::WordListOptions;

/// Environment variable listing the built-in checks to enable.
pub const WEAK_VARIANTS_ENV: &str = "PWD_WEAK_VARIANTS";

/// Registry of `WordListOptions` keyed by name.
#[derive(Debug, Default, Clone)]
pub struct SettingsStore {
    entries: HashMap<String, WordListOptions>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `options` under `name`.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::DuplicateName` if `name` is already taken.
    /// The existing entry is left untouched.
    pub fn add(&mut self, name: impl Into<String>, options: WordListOptions) -> Result<(), SettingsError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            #[cfg(feature = "tracing")]
            tracing::error!("Settings registration FAILED: duplicate name {}", name);
            return Err(SettingsError::DuplicateName(name));
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Settings registered: {} ({:?})", name, options);

        self.entries.insert(name, options);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&WordListOptions> {
        self.entries.get(name)
    }

    /// Like [`get`](Self::get), but reports a missing name as an error.
    pub fn resolve(&self, name: &str) -> Result<&WordListOptions, SettingsError> {
        self.get(name)
            .ok_or_else(|| SettingsError::NotFound(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Option<WordListOptions> {
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Parses a comma-separated list of built-in check names.
///
/// Accepted names are `number-suffix`, `doubled-word` and `reversed-word`,
/// case-insensitive. Blank items are skipped.
pub fn parse_checks(list: &str) -> Result<WordListOptions, SettingsError> {
    let mut options = WordListOptions::default();
    for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match item.to_lowercase().as_str() {
            "number-suffix" => options.check_number_suffix = true,
            "doubled-word" => options.check_doubled_word = true,
            "reversed-word" => options.check_reversed_word = true,
            _ => return Err(SettingsError::UnknownCheck(item.to_string())),
        }
    }
    Ok(options)
}

/// Builds options from the `PWD_WEAK_VARIANTS` environment variable.
///
/// If the variable is unset every check is disabled.
///
/// # Example
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_WEAK_VARIANTS", "number-suffix,reversed-word"); }
/// let options = pwd_pattern::options_from_env()?;
/// ```
pub fn options_from_env() -> Result<WordListOptions, SettingsError> {
    let Ok(list) = std::env::var(WEAK_VARIANTS_ENV) else {
        return Ok(WordListOptions::default());
    };

    let options = parse_checks(&list)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Weak variant checks loaded from {}: {:?}", WEAK_VARIANTS_ENV, options);

    Ok(options)
}
