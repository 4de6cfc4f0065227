use rayon::prelude::*;

use crate::clusterer::{
    CHUNK_SIZE,
    types::{Accumulator, Centroid, Point},
};

/// Sum coordinates and count points per cluster.
///
/// Chunks are folded in parallel into private accumulators, then merged in
/// chunk order, so the result does not depend on the pool size.
pub fn accumulate(points: &[Point], num_clusters: usize) -> Accumulator {
    let partials: Vec<Accumulator> = points
        .par_chunks(CHUNK_SIZE)
        .map(|chunk| fold_chunk(chunk, num_clusters))
        .collect();

    partials
        .into_iter()
        .fold(Accumulator::new(num_clusters), Accumulator::merge)
}

pub fn accumulate_sequential(points: &[Point], num_clusters: usize) -> Accumulator {
    fold_chunk(points, num_clusters)
}

fn fold_chunk(points: &[Point], num_clusters: usize) -> Accumulator {
    let mut acc = Accumulator::new(num_clusters);
    for point in points {
        acc.add(point);
    }
    acc
}

/// Turn sums into means.
///
/// A cluster's running sum starts at its seed point, so a non-empty cluster
/// ends at `(seed + sum) / count`. Empty clusters keep their seed.
pub fn compute_means(seeds: &[Centroid], acc: &Accumulator) -> Vec<Centroid> {
    seeds
        .iter()
        .zip(acc.sums.iter().zip(&acc.counts))
        .map(|(seed, (sum, &count))| {
            if count > 0 {
                let n = count as f64;
                Centroid::new((seed.x + sum.x) / n, (seed.y + sum.y) / n)
            } else {
                *seed
            }
        })
        .collect()
}
