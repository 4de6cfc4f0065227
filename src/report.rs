use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::clusterer::ClusterResult;
use crate::config::ClusterConfig;

#[derive(Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub created_at: String,
    pub generator: String,
    pub input: String,
    pub output: String,
    pub stats: RunStats,
    pub output_sha256: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RunStats {
    pub point_count: usize,
    pub num_clusters: usize,
    pub max_iterations: usize,
    pub threads: usize,
    pub iterations: usize,
    pub converged: bool,
    pub cluster_sizes: Vec<usize>,
    pub elapsed_secs: f64,
}

impl RunReport {
    pub fn new(
        input: &Path,
        output: &Path,
        config: &ClusterConfig,
        threads: usize,
        point_count: usize,
        result: &ClusterResult,
        elapsed_secs: f64,
    ) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("parkmeans v{}", env!("CARGO_PKG_VERSION")),
            input: input.display().to_string(),
            output: output.display().to_string(),
            stats: RunStats {
                point_count,
                num_clusters: config.num_clusters,
                max_iterations: config.max_iterations,
                threads,
                iterations: result.iterations,
                converged: result.converged,
                cluster_sizes: result.cluster_sizes.clone(),
                elapsed_secs,
            },
            output_sha256: None,
        }
    }

    /// Record the SHA-256 of the written CSV
    pub fn with_output_checksum(mut self, path: &Path) -> Result<Self> {
        self.output_sha256 = Some(sha256_file(path)?);
        Ok(self)
    }

    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize run report")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write run report: {}", path.display()))?;
        Ok(())
    }
}

pub fn sha256_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read file for hashing: {}", path.display()))?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ClusterResult {
        ClusterResult {
            iterations: 4,
            converged: true,
            cluster_sizes: vec![2, 2],
        }
    }

    #[test]
    fn test_sha256_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "abc").unwrap();

        assert_eq!(
            sha256_file(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_report_written_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");
        let report_path = dir.path().join("report.json");
        fs::write(&output, "0,0,0\n").unwrap();

        let config = ClusterConfig::new(2).max_iterations(20);
        let report = RunReport::new(
            Path::new("in.csv"),
            &output,
            &config,
            4,
            4,
            &sample_result(),
            0.25,
        )
        .with_output_checksum(&output)
        .unwrap();
        report.write_to_file(&report_path).unwrap();

        let loaded: RunReport =
            serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
        assert_eq!(loaded.run_id, report.run_id);
        assert_eq!(loaded.input, "in.csv");
        assert_eq!(loaded.stats.num_clusters, 2);
        assert_eq!(loaded.stats.cluster_sizes, vec![2, 2]);
        assert!(loaded.stats.converged);
        assert_eq!(loaded.output_sha256.as_deref().map(str::len), Some(64));
        assert!(loaded.generator.starts_with("parkmeans v"));
    }

    #[test]
    fn test_checksum_missing_file() {
        let report = RunReport::new(
            Path::new("in.csv"),
            Path::new("/nonexistent/out.csv"),
            &ClusterConfig::new(2),
            1,
            0,
            &sample_result(),
            0.0,
        );
        assert!(report.with_output_checksum(Path::new("/nonexistent/out.csv")).is_err());
    }
}
