use serde::{Deserialize, Serialize};

use crate::search::SearchError;

/// Search parameters. Immutable for the duration of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of plies searched from the root.
    pub depth: usize,
    /// Evaluate root moves on a worker pool.
    pub parallel: bool,
    /// Upper bound of the worker pool size.
    pub workers: usize,
    /// Root moves required before the pool is used (strictly more than this).
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            parallel: true,
            workers: 8,
            parallel_threshold: 4,
        }
    }
}

impl SearchConfig {
    pub fn sequential(depth: usize) -> Self {
        Self {
            depth,
            parallel: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.depth == 0 {
            return Err(SearchError::InvalidConfig("depth must be positive".into()));
        }
        if self.workers == 0 {
            return Err(SearchError::InvalidConfig(
                "worker count must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Whether a root with `moves` candidates is dispatched to the pool.
    pub fn use_parallel(&self, moves: usize) -> bool {
        self.parallel && moves > self.parallel_threshold
    }

    /// Pool size for a root with `moves` candidates.
    pub fn pool_size(&self, moves: usize) -> usize {
        self.workers.min(moves).max(1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_json() {
        let config: SearchConfig = serde_json::from_str(r#"{"depth": 3}"#).unwrap();
        assert_eq!(config.depth, 3);
        assert!(config.parallel);
        assert_eq!(config.workers, 8);
        assert_eq!(config.parallel_threshold, 4);
    }

    #[test]
    fn eligibility() {
        let config = SearchConfig::default();
        assert!(!config.use_parallel(4));
        assert!(config.use_parallel(5));
        assert!(!SearchConfig::sequential(5).use_parallel(81));
        assert_eq!(config.pool_size(5), 5);
        assert_eq!(config.pool_size(81), 8);
    }

    #[test]
    fn invalid() {
        assert!(SearchConfig::sequential(0).validate().is_err());
        let config = SearchConfig {
            workers: 0,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(SearchConfig::default().validate().is_ok());
    }
}
