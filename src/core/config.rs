#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::generator::Generator;

/// How a [`Generator`] should be seeded.
///
/// `seed: None` means "derive one from the environment" (see
/// [`crate::entropy`]); an explicit seed makes the run reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratorConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<i64>,
}

impl GeneratorConfig {
    /// Builder: fix the seed.
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn is_reproducible(&self) -> bool {
        self.seed.is_some()
    }
}

impl Generator {
    /// Build a generator from `cfg`, falling back to the time-derived seed.
    #[cfg(feature = "std")]
    pub fn from_config(cfg: &GeneratorConfig) -> Self {
        match cfg.seed {
            Some(seed) => Self::new(seed),
            None => Self::new_default(),
        }
    }
}
