/// Cluster id carried by a point that has not been assigned yet
pub const UNASSIGNED: i32 = -1;

/// Largest cluster count a point's `cluster_id` can address
pub const MAX_CLUSTERS: usize = i32::MAX as usize;

/// A 2-D data point and the cluster it currently belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// In `[0, num_clusters)` once clustered, `UNASSIGNED` before
    pub cluster_id: i32,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            cluster_id: UNASSIGNED,
        }
    }

    /// Current cluster as an index, `None` while unassigned
    pub fn cluster(&self) -> Option<usize> {
        usize::try_from(self.cluster_id).ok()
    }
}

/// Mean position of the points in one cluster
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

impl Centroid {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<&Point> for Centroid {
    fn from(point: &Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// Per-cluster coordinate sums and point counts
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    pub sums: Vec<Centroid>,
    pub counts: Vec<usize>,
}

impl Accumulator {
    pub fn new(num_clusters: usize) -> Self {
        Self {
            sums: vec![Centroid::default(); num_clusters],
            counts: vec![0; num_clusters],
        }
    }

    pub fn add(&mut self, point: &Point) {
        if let Some(c) = point.cluster() {
            self.sums[c].x += point.x;
            self.sums[c].y += point.y;
            self.counts[c] += 1;
        }
    }

    pub fn merge(mut self, other: Accumulator) -> Self {
        for (c, (sum, count)) in other.sums.iter().zip(other.counts).enumerate() {
            self.sums[c].x += sum.x;
            self.sums[c].y += sum.y;
            self.counts[c] += count;
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct ClusterResult {
    /// Refinement iterations actually run
    pub iterations: usize,
    /// True when the last reassignment pass changed nothing
    pub converged: bool,
    /// Points per cluster after the final pass
    pub cluster_sizes: Vec<usize>,
}
