mod centroid;
mod kmeans;
mod seeding;
mod similarity;
mod types;


/// Points per parallel work unit in the assignment and accumulation stages
pub(crate) const CHUNK_SIZE: usize = 4096;

pub use centroid::{accumulate, accumulate_sequential, compute_means};
pub use kmeans::{cluster, cluster_with_config, cluster_with_rng, reassign};
pub use seeding::{assign_randomly, sample_seed_indices, seed_centroids};
pub use similarity::{euclidean_distance, nearest_centroid};
pub use types::{Accumulator, Centroid, ClusterResult, MAX_CLUSTERS, Point, UNASSIGNED};
