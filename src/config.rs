use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_FEATURES: usize = 5000;
pub const DEFAULT_TOP_N: usize = 5;

/// Recommender settings.
///
/// `max_features == 0` disables the vocabulary cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// upper bound on vocabulary size
    pub max_features: usize,
    /// number of recommendations returned by default
    pub top_n: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl RecommenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// cap handed to the vocabulary builder
    #[inline]
    pub fn feature_cap(&self) -> Option<usize> {
        (self.max_features > 0).then_some(self.max_features)
    }
}
