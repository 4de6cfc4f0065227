use crate::clusterer::types::{Centroid, Point};

pub fn euclidean_distance(point: &Point, centroid: &Centroid) -> f64 {
    let dx = point.x - centroid.x;
    let dy = point.y - centroid.y;

    (dx * dx + dy * dy).sqrt()
}

/// Index of the closest centroid. Ties go to the lowest index.
pub fn nearest_centroid(point: &Point, centroids: &[Centroid]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;

    for (c, centroid) in centroids.iter().enumerate() {
        let distance = euclidean_distance(point, centroid);
        if distance < best_distance {
            best_distance = distance;
            best = c;
        }
    }

    best
}
