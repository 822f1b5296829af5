// crates/ipxact-rs-tool/src/commands.rs

//! The per-document work behind each subcommand.

use anyhow::{Context, Result};
use ipxact_rs::{ValidationIssue, load_component_from_str, save_component_to_string, validate_component};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// What to do with each input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Re-save in canonical form, to stdout or back into the file.
    Format { in_place: bool },
    /// Load and run the validator.
    Check,
    /// Print the parsed model as JSON.
    Dump,
}

/// A single unit of work for the pool.
#[derive(Debug, Clone)]
pub struct Job {
    pub path: PathBuf,
    pub action: Action,
}

/// The result of a finished job.
#[derive(Debug)]
pub struct Outcome {
    pub path: PathBuf,
    /// Text to print on stdout, if any.
    pub output: Option<String>,
    /// Validator findings (only for `check`).
    pub issues: Vec<ValidationIssue>,
}

/// Loads a document and writes it back in canonical form.
pub fn format_document(xml: &str) -> Result<String> {
    let component = load_component_from_str(xml).context("failed to parse component")?;
    save_component_to_string(&component).context("failed to serialize component")
}

/// Loads a document and returns every validator finding.
pub fn check_document(xml: &str) -> Result<Vec<ValidationIssue>> {
    let component = load_component_from_str(xml).context("failed to parse component")?;
    Ok(validate_component(&component))
}

/// Loads a document and renders the model as pretty JSON.
pub fn dump_document(xml: &str) -> Result<String> {
    let component = load_component_from_str(xml).context("failed to parse component")?;
    serde_json::to_string_pretty(&component).context("failed to encode component as JSON")
}

/// Runs one job against the file system.
pub fn run_job(job: &Job) -> Result<Outcome> {
    let xml = read_input(&job.path)?;
    debug!("Processing {} ({:?})", job.path.display(), job.action);

    let mut outcome = Outcome {
        path: job.path.clone(),
        output: None,
        issues: Vec::new(),
    };

    match job.action {
        Action::Format { in_place } => {
            let formatted = format_document(&xml)
                .with_context(|| format!("cannot format {}", job.path.display()))?;
            if in_place {
                if formatted != xml {
                    fs::write(&job.path, formatted)
                        .with_context(|| format!("cannot write {}", job.path.display()))?;
                    info!("Rewrote {}", job.path.display());
                }
            } else {
                outcome.output = Some(formatted);
            }
        }
        Action::Check => {
            outcome.issues = check_document(&xml)
                .with_context(|| format!("cannot check {}", job.path.display()))?;
        }
        Action::Dump => {
            outcome.output = Some(
                dump_document(&xml)
                    .with_context(|| format!("cannot dump {}", job.path.display()))?,
            );
        }
    }
    Ok(outcome)
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}
