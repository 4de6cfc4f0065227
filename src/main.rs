use anyhow::{Context, Result};
use clap::Parser;
use parkmeans::{ClusterConfig, RunReport, cluster_with_config, load_csv, save_csv};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Parallel Lloyd's k-means for 2-D points read from CSV
#[derive(Parser, Debug)]
#[command(name = "parkmeans", version, about)]
struct Cli {
    /// Number of points to read from the dataset
    size: usize,

    /// Number of clusters to partition the points into
    num_clusters: usize,

    /// Where to write `x,y,cluster_id` rows
    output: PathBuf,

    /// Worker pool size (defaults to the number of cores)
    threads: Option<usize>,

    /// Input CSV (defaults to `<SIZE>_data.csv`)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Iteration cap for the refinement loop
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with cluster settings; command-line values take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON run report here
    #[arg(long)]
    report: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn cluster_config(&self) -> Result<ClusterConfig> {
        let mut config = match &self.config {
            Some(path) => ClusterConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => ClusterConfig::new(self.num_clusters),
        };

        config.num_clusters = self.num_clusters;
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(threads) = self.threads {
            config.threads = Some(threads);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}_data.csv", self.size)))
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.cluster_config()?;
    let input = cli.input_path();

    let mut points = load_csv(&input, Some(cli.size))?;
    if points.len() < cli.size {
        warn!(
            requested = cli.size,
            loaded = points.len(),
            "dataset has fewer points than requested"
        );
    }
    info!(points = points.len(), input = %input.display(), "dataset ready");

    let start = Instant::now();
    let result = cluster_with_config(&mut points, &config)?;
    let elapsed = start.elapsed().as_secs_f64();
    println!("Parallel execution time: {:.6}s", elapsed);

    save_csv(&cli.output, &points)?;
    info!(output = %cli.output.display(), "clusters written");

    if let Some(report_path) = &cli.report {
        let threads = config.threads.unwrap_or_else(rayon::current_num_threads);
        RunReport::new(
            &input,
            &cli.output,
            &config,
            threads,
            points.len(),
            &result,
            elapsed,
        )
        .with_output_checksum(&cli.output)?
        .write_to_file(report_path)?;
        info!(report = %report_path.display(), "run report written");
    }

    Ok(())
}
