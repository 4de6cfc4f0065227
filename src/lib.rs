// Public API exports
pub mod clusterer;
pub mod config;
pub mod dataset;
pub mod report;

// Re-export main types for convenience
pub use clusterer::{
    Centroid, ClusterResult, Point, UNASSIGNED, cluster, cluster_with_config, cluster_with_rng,
};
pub use config::{ClusterConfig, ConfigError, DEFAULT_MAX_ITERATIONS};
pub use dataset::{DatasetError, load_csv, save_csv};
pub use report::RunReport;
