use clap::Parser;
use mars_robots::config::Config;
use mars_robots::run_log::RunLog;
use mars_robots::Simulation;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Walk robots across a bounded grid and report where they end up
#[derive(Debug, Parser)]
#[command(name = "mars_robots", version)]
struct Cli {
    /// Instruction file (defaults to input.default_path from the config)
    input: Option<PathBuf>,

    /// Configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Write a JSON run log to this path
    #[arg(long)]
    run_log: Option<PathBuf>,
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load(&cli.config);
    init_tracing(&config.logging.filter);

    let input_path = cli
        .input
        .unwrap_or_else(|| PathBuf::from(&config.input.default_path));

    let input = match fs::read_to_string(&input_path) {
        Ok(contents) => contents,
        Err(e) => {
            error!(path = %input_path.display(), error = %e, "failed to read instruction file");
            eprintln!("Error reading instruction file");
            return ExitCode::FAILURE;
        }
    };

    let run_log_path = cli.run_log.or_else(|| {
        config
            .logging
            .enable_run_log
            .then(|| PathBuf::from(&config.logging.run_log_path))
    });

    let simulation = Simulation::new(config.simulation.clone());
    let mut log = RunLog::new();
    let result = match run_log_path {
        Some(_) => simulation.run_logged(&input, &mut log),
        None => simulation.run(&input),
    };

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", output);

    if let Some(path) = run_log_path {
        info!("{}", log.summary());
        if let Err(e) = log.save_to_file(&path) {
            eprintln!("Warning: failed to write run log to {}: {}", path.display(), e);
        }
    }

    ExitCode::SUCCESS
}
