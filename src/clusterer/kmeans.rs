use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::clusterer::{
    centroid::{accumulate, accumulate_sequential, compute_means},
    seeding::{assign_randomly, seed_centroids},
    similarity::nearest_centroid,
    types::{Centroid, ClusterResult, MAX_CLUSTERS, Point},
};
use crate::config::{ClusterConfig, ConfigError};

/// Cluster `points` in place on the current rayon pool.
///
/// The master generator is seeded from OS entropy once per call.
pub fn cluster(points: &mut [Point], num_clusters: usize, max_iterations: usize) {
    let mut rng = ChaCha8Rng::from_entropy();
    cluster_with_rng(points, num_clusters, max_iterations, &mut rng);
}

/// Validate `config`, build its worker pool and cluster inside it
pub fn cluster_with_config(
    points: &mut [Point],
    config: &ClusterConfig,
) -> Result<ClusterResult, ConfigError> {
    config.validate()?;
    let pool = config.build_pool()?;
    let mut rng = config.rng();

    debug!(threads = pool.current_num_threads(), "worker pool ready");

    Ok(pool.install(|| {
        cluster_with_rng(points, config.num_clusters, config.max_iterations, &mut rng)
    }))
}

pub fn cluster_with_rng<R: Rng>(
    points: &mut [Point],
    num_clusters: usize,
    max_iterations: usize,
    rng: &mut R,
) -> ClusterResult {
    if num_clusters > MAX_CLUSTERS {
        warn!(num_clusters, max = MAX_CLUSTERS, "cluster count out of range, nothing assigned");
        return ClusterResult {
            iterations: 0,
            converged: false,
            cluster_sizes: Vec::new(),
        };
    }

    if points.is_empty() || num_clusters == 0 {
        return ClusterResult {
            iterations: 0,
            converged: false,
            cluster_sizes: vec![0; num_clusters],
        };
    }

    if num_clusters > points.len() {
        warn!(
            num_clusters,
            points = points.len(),
            "more clusters than points, some clusters will stay empty"
        );
    }

    // 1. Random initial assignment
    assign_randomly(points, num_clusters, rng);

    let mut iterations = 0;
    let mut converged = false;

    while !converged && iterations < max_iterations {
        iterations += 1;

        // 2. Seed from random points, then average the current members
        let seeds = seed_centroids(points, num_clusters, rng);
        let acc = accumulate(points, num_clusters);
        let centroids = compute_means(&seeds, &acc);

        // 3. Move every point to its nearest centroid
        let changed = reassign(points, &centroids);
        converged = changed == 0;

        debug!(iteration = iterations, changed, "lloyd iteration");
    }

    info!(iterations, converged, points = points.len(), "clustering finished");

    ClusterResult {
        iterations,
        converged,
        cluster_sizes: accumulate_sequential(points, num_clusters).counts,
    }
}

/// Reassign each point to its nearest centroid; returns how many moved
pub fn reassign(points: &mut [Point], centroids: &[Centroid]) -> usize {
    points
        .par_iter_mut()
        .map(|point| {
            let best = nearest_centroid(point, centroids) as i32;
            if point.cluster_id != best {
                point.cluster_id = best;
                1
            } else {
                0
            }
        })
        .sum()
}
