// crates/ipxact-rs-tool/src/main.rs

//! `ipxact-fmt`: formats, checks and dumps IP-XACT component documents.

mod commands;
mod pool;

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use commands::{Action, Job, run_job};
use log::{LevelFilter, error, info};
use std::path::PathBuf;
use std::thread;

#[derive(Parser, Debug)]
#[command(name = "ipxact-fmt", version, about = "IP-XACT component document tool")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Number of worker threads (defaults to the available parallelism)
    #[arg(short, long)]
    jobs: Option<usize>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Re-save documents in canonical form
    Format {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Overwrite the input files instead of printing
        #[arg(long)]
        in_place: bool,
    },
    /// Report consistency problems; exits non-zero if any are found
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the parsed model as JSON
    Dump {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let Cli { verbose, jobs, cmd } = Cli::parse();

    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let (files, action) = match cmd {
        Cmd::Format { files, in_place } => (files, Action::Format { in_place }),
        Cmd::Check { files } => (files, Action::Check),
        Cmd::Dump { files } => (files, Action::Dump),
    };

    let workers = jobs.unwrap_or_else(|| {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    });
    info!("Processing {} file(s) on {} worker(s)", files.len(), workers);

    let jobs: Vec<Job> = files
        .into_iter()
        .map(|path| Job { path, action })
        .collect();

    let mut failures = 0usize;
    let mut findings = 0usize;
    for result in pool::run_jobs(jobs, workers, run_job) {
        match result {
            Ok(outcome) => {
                if let Some(output) = outcome.output {
                    print!("{}", output);
                    if !output.ends_with('\n') {
                        println!();
                    }
                }
                for issue in &outcome.issues {
                    println!("{}: {}", outcome.path.display(), issue);
                }
                findings += outcome.issues.len();
            }
            Err(e) => {
                error!("{:#}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} file(s) could not be processed", failures);
    }
    if findings > 0 {
        bail!("{} issue(s) found", findings);
    }
    Ok(())
}
