use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::clusterer::{
    CHUNK_SIZE,
    types::{Centroid, Point},
};

/// Give every point a uniform random cluster id.
///
/// Each chunk draws from its own generator, seeded from `rng` before the fork.
/// `num_clusters` is capped at `MAX_CLUSTERS`.
pub fn assign_randomly<R: Rng>(points: &mut [Point], num_clusters: usize, rng: &mut R) {
    let chunk_seeds: Vec<u64> = (0..points.len().div_ceil(CHUNK_SIZE))
        .map(|_| rng.gen())
        .collect();

    let k = i32::try_from(num_clusters).unwrap_or(i32::MAX);
    points
        .par_chunks_mut(CHUNK_SIZE)
        .zip(chunk_seeds.par_iter())
        .for_each(|(chunk, &seed)| {
            let mut chunk_rng = ChaCha8Rng::seed_from_u64(seed);
            for point in chunk {
                point.cluster_id = chunk_rng.gen_range(0..k);
            }
        });
}

/// Pick the point indices that seed this iteration's centroids.
///
/// Indices are distinct (rejection sampling) while the dataset has enough
/// points; clusters beyond `points_len` reuse random indices.
pub fn sample_seed_indices<R: Rng>(
    points_len: usize,
    num_clusters: usize,
    rng: &mut R,
) -> Vec<usize> {
    let distinct = num_clusters.min(points_len);
    let mut indices = Vec::with_capacity(num_clusters);

    while indices.len() < distinct {
        let index = rng.gen_range(0..points_len);
        if !indices.contains(&index) {
            indices.push(index);
        }
    }

    while indices.len() < num_clusters {
        indices.push(rng.gen_range(0..points_len));
    }

    indices
}

pub fn seed_centroids<R: Rng>(
    points: &[Point],
    num_clusters: usize,
    rng: &mut R,
) -> Vec<Centroid> {
    sample_seed_indices(points.len(), num_clusters, rng)
        .into_iter()
        .map(|i| Centroid::from(&points[i]))
        .collect()
}
