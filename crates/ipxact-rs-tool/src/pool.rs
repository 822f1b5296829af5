// crates/ipxact-rs-tool/src/pool.rs

//! A fixed pool of worker threads fed through a `crossbeam-channel` queue.
//!
//! Each document is handled by exactly one worker. Results come back on a
//! second channel and are returned in input order.

use crate::commands::{Job, Outcome};
use anyhow::{Result, anyhow};
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{error, trace};
use std::thread;

/// Runs `work` for every job on `workers` threads.
pub fn run_jobs<F>(jobs: Vec<Job>, workers: usize, work: F) -> Vec<Result<Outcome>>
where
    F: Fn(&Job) -> Result<Outcome> + Send + Sync + 'static + Copy,
{
    let total = jobs.len();
    let workers = workers.clamp(1, total.max(1));

    // 1. Queue every job with its position.
    let (job_tx, job_rx) = unbounded::<(usize, Job)>();
    let unqueued = queue_jobs(jobs, &job_tx);
    drop(job_tx);

    // 2. Spawn the workers.
    let (result_tx, result_rx) = unbounded::<(usize, Result<Outcome>)>();
    let handles: Vec<_> = (0..workers)
        .map(|id| {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            thread::spawn(move || worker_loop(id, job_rx, result_tx, work))
        })
        .collect();
    drop(result_tx);

    // 3. Collect in input order.
    let mut results: Vec<Option<Result<Outcome>>> = (0..total).map(|_| None).collect();
    for index in unqueued {
        results[index] = Some(Err(anyhow!("job could not be queued")));
    }
    for (index, result) in result_rx.iter() {
        results[index] = Some(result);
    }

    for handle in handles {
        if handle.join().is_err() {
            error!("A worker thread panicked");
        }
    }

    results
        .into_iter()
        .map(|r| r.unwrap_or_else(|| Err(anyhow!("job was not processed"))))
        .collect()
}

/// Sends every job with its position and returns the positions that could not
/// be queued because the receiving side is gone.
fn queue_jobs(jobs: Vec<Job>, queue: &Sender<(usize, Job)>) -> Vec<usize> {
    let mut unqueued = Vec::new();
    for (index, job) in jobs.into_iter().enumerate() {
        if let Err(failed) = queue.send((index, job)) {
            let (index, job) = failed.into_inner();
            error!("Could not queue {}", job.path.display());
            unqueued.push(index);
        }
    }
    unqueued
}

fn worker_loop<F>(
    id: usize,
    jobs: Receiver<(usize, Job)>,
    results: Sender<(usize, Result<Outcome>)>,
    work: F,
) where
    F: Fn(&Job) -> Result<Outcome>,
{
    for (index, job) in jobs.iter() {
        trace!("[worker {}] {}", id, job.path.display());
        if results.send((index, work(&job))).is_err() {
            break;
        }
    }
}
