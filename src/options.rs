//! Variant detection options.

use std::fmt;
use std::sync::Arc;

use crate::builder::CandidateBuilder;

/// Selects which weak variants are folded into the password pattern.
///
/// All checks are off and no custom builders are registered by default.
#[derive(Clone, Default)]
pub struct WordListOptions {
    pub check_number_suffix: bool,
    pub check_doubled_word: bool,
    pub check_reversed_word: bool,
    custom_builders: Vec<Arc<dyn CandidateBuilder>>,
}

impl WordListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_number_suffix(mut self, enabled: bool) -> Self {
        self.check_number_suffix = enabled;
        self
    }

    pub fn with_doubled_word(mut self, enabled: bool) -> Self {
        self.check_doubled_word = enabled;
        self
    }

    pub fn with_reversed_word(mut self, enabled: bool) -> Self {
        self.check_reversed_word = enabled;
        self
    }

    /// Appends a custom builder. Builders run in the order they were added.
    pub fn with_custom_builder<B>(mut self, builder: B) -> Self
    where
        B: CandidateBuilder + 'static,
    {
        self.add_custom_builder(builder);
        self
    }

    pub fn add_custom_builder<B>(&mut self, builder: B)
    where
        B: CandidateBuilder + 'static,
    {
        self.custom_builders.push(Arc::new(builder));
    }

    pub fn custom_builders(&self) -> &[Arc<dyn CandidateBuilder>] {
        &self.custom_builders
    }
}

impl fmt::Debug for WordListOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordListOptions")
            .field("check_number_suffix", &self.check_number_suffix)
            .field("check_doubled_word", &self.check_doubled_word)
            .field("check_reversed_word", &self.check_reversed_word)
            .field("custom_builders", &self.custom_builders.len())
            .finish()
    }
}
