//! Generator configuration.

/// Number of notes written when no count is given.
pub const DEFAULT_NUM_FILES: usize = 40;

/// Settings for a [`NoteGenerator`](super::NoteGenerator) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of notes to write.
    pub num_files: usize,
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_files: DEFAULT_NUM_FILES,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of notes.
    #[must_use]
    pub fn with_num_files(mut self, num_files: usize) -> Self {
        self.num_files = num_files;
        self
    }

    /// Fix the RNG seed for reproducible output.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
