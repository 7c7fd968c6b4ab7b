use std::{
  fmt::Debug,
  sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

use taskpack_common::{BundlerConfig, JobId, JobStats, OverlapPolicy};
use taskpack_error::BuildResult;
use tokio::sync::Mutex;

use crate::CompiledJob;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
  Idle,
  Running,
}

/// A compiled job bound to the one configuration it was created from. Owned by the registry
/// entry of its identity and never reconfigured.
pub struct JobHandle {
  id: JobId,
  config: BundlerConfig,
  job: Box<dyn CompiledJob>,
  gate: Mutex<()>,
  running: AtomicBool,
  runs: AtomicUsize,
}

impl JobHandle {
  pub fn new(id: JobId, config: BundlerConfig, job: Box<dyn CompiledJob>) -> Self {
    Self {
      id,
      config,
      job,
      gate: Mutex::new(()),
      running: AtomicBool::new(false),
      runs: AtomicUsize::new(0),
    }
  }

  pub fn id(&self) -> &JobId {
    &self.id
  }

  pub fn config(&self) -> &BundlerConfig {
    &self.config
  }

  pub fn state(&self) -> JobState {
    if self.running.load(Ordering::Acquire) {
      JobState::Running
    } else {
      JobState::Idle
    }
  }

  /// Number of runs started on this handle so far.
  pub fn run_count(&self) -> usize {
    self.runs.load(Ordering::Relaxed)
  }

  /// Runs the job once. Runs on one handle never interleave: an overlapping call either waits
  /// for the current run or fails, depending on `policy`.
  pub async fn run(&self, policy: OverlapPolicy) -> BuildResult<JobStats> {
    let _permit = match policy {
      OverlapPolicy::Queue => self.gate.lock().await,
      OverlapPolicy::Reject => match self.gate.try_lock() {
        Ok(permit) => permit,
        Err(_) => return Err(anyhow::anyhow!("Job `{}` is already running", self.id).into()),
      },
    };

    let _running = RunningGuard::enter(&self.running);
    self.runs.fetch_add(1, Ordering::Relaxed);
    self.job.run().await
  }
}

impl Debug for JobHandle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JobHandle")
      .field("id", &self.id)
      .field("state", &self.state())
      .field("runs", &self.run_count())
      .finish_non_exhaustive()
  }
}

// Resets the state even when the run future is dropped or panics.
struct RunningGuard<'a>(&'a AtomicBool);

impl<'a> RunningGuard<'a> {
  fn enter(flag: &'a AtomicBool) -> Self {
    flag.store(true, Ordering::Release);
    Self(flag)
  }
}

impl Drop for RunningGuard<'_> {
  fn drop(&mut self) {
    self.0.store(false, Ordering::Release);
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use async_trait::async_trait;
  use taskpack_common::TaskOptions;
  use taskpack_resolver::ProjectRoot;
  use tokio::sync::Notify;

  use super::*;
  use crate::{compose, normalize_task};

  #[derive(Default)]
  struct HeldJob {
    started: Arc<Notify>,
    release: Arc<Notify>,
  }

  #[async_trait]
  impl CompiledJob for HeldJob {
    async fn run(&self) -> BuildResult<JobStats> {
      self.started.notify_one();
      self.release.notified().await;
      Ok(JobStats::default())
    }
  }

  fn held_handle() -> (Arc<JobHandle>, Arc<Notify>, Arc<Notify>) {
    let task =
      normalize_task(TaskOptions::new("src/app.js", "dist/"), &ProjectRoot::new("/srv/app"))
        .unwrap();
    let job = HeldJob::default();
    let (started, release) = (Arc::clone(&job.started), Arc::clone(&job.release));
    let handle = JobHandle::new(task.id.clone(), compose(&task, false), Box::new(job));
    (Arc::new(handle), started, release)
  }

  #[tokio::test]
  async fn reject_policy_fails_overlapping_run() {
    let (handle, started, release) = held_handle();
    assert_eq!(handle.state(), JobState::Idle);

    let first = tokio::spawn({
      let handle = Arc::clone(&handle);
      async move { handle.run(OverlapPolicy::Reject).await }
    });
    started.notified().await;
    assert_eq!(handle.state(), JobState::Running);

    let overlapping = handle.run(OverlapPolicy::Reject).await.unwrap_err();
    assert!(overlapping[0].to_string().contains("is already running"));

    release.notify_one();
    first.await.unwrap().unwrap();
    assert_eq!(handle.state(), JobState::Idle);
    assert_eq!(handle.run_count(), 1);
  }

  #[tokio::test]
  async fn queue_policy_serializes_runs() {
    let (handle, started, release) = held_handle();

    let first = tokio::spawn({
      let handle = Arc::clone(&handle);
      async move { handle.run(OverlapPolicy::Queue).await }
    });
    started.notified().await;

    let second = tokio::spawn({
      let handle = Arc::clone(&handle);
      async move { handle.run(OverlapPolicy::Queue).await }
    });
    tokio::task::yield_now().await;
    // The second run is parked on the gate and has not started yet.
    assert_eq!(handle.run_count(), 1);

    release.notify_one();
    first.await.unwrap().unwrap();
    started.notified().await;
    assert_eq!(handle.run_count(), 2);

    release.notify_one();
    second.await.unwrap().unwrap();
    assert_eq!(handle.state(), JobState::Idle);
  }
}
