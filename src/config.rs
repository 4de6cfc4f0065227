use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::clusterer::MAX_CLUSTERS;

pub const DEFAULT_MAX_ITERATIONS: usize = 20;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("num_clusters must be at least 1")]
    InvalidClusterCount,

    #[error("num_clusters {0} exceeds the maximum of {max}", max = MAX_CLUSTERS)]
    TooManyClusters(usize),

    #[error("threads must be at least 1 when set")]
    InvalidThreadCount,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Parameters for one clustering run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    pub num_clusters: usize,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Worker pool size; rayon's default (one per core) when unset
    #[serde(default)]
    pub threads: Option<usize>,
    /// Master seed; OS entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl ClusterConfig {
    pub fn new(num_clusters: usize) -> Self {
        Self {
            num_clusters,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            threads: None,
            seed: None,
        }
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a JSON config and validate it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config: ClusterConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_clusters == 0 {
            return Err(ConfigError::InvalidClusterCount);
        }
        if self.num_clusters > MAX_CLUSTERS {
            return Err(ConfigError::TooManyClusters(self.num_clusters));
        }
        if self.threads == Some(0) {
            return Err(ConfigError::InvalidThreadCount);
        }
        Ok(())
    }

    pub fn build_pool(&self) -> Result<rayon::ThreadPool, ConfigError> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = self.threads {
            builder = builder.num_threads(threads);
        }
        Ok(builder.build()?)
    }

    /// Master generator for a run
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
