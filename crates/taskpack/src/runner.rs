use std::{panic::AssertUnwindSafe, sync::Arc};

use anyhow::Context;
use futures::FutureExt;
use taskpack_common::{
  BundlerConfig, JobStats, LoaderNames, NormalizedTaskOptions, OverlapPolicy, ResolvedPaths,
  TaskOptions, TaskOutcome, TaskReport,
};
use taskpack_error::{BuildError, BuildResult};
use taskpack_utils::path_ext::PathExt;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::{
  compose_config, normalize_task, JobHandle, JobRegistry, OnComplete, SharedEngine, SharedHost,
};

#[derive(Debug, Clone, Default)]
pub struct RunnerOptions {
  pub overlap: OverlapPolicy,
  pub loaders: LoaderNames,
}

/// Turns task descriptors into memoized bundling jobs and runs them.
pub struct TaskRunner {
  engine: SharedEngine,
  host: SharedHost,
  registry: Arc<JobRegistry>,
  options: RunnerOptions,
}

impl TaskRunner {
  pub fn new(engine: SharedEngine, host: SharedHost, registry: Arc<JobRegistry>) -> Self {
    Self { engine, host, registry, options: RunnerOptions::default() }
  }

  #[must_use]
  pub fn with_options(mut self, options: RunnerOptions) -> Self {
    self.options = options;
    self
  }

  pub fn registry(&self) -> &Arc<JobRegistry> {
    &self.registry
  }

  /// Resolves the job handle of a task, composing a configuration and creating the job on the
  /// first request for its identity. Later requests get the cached handle, whatever their
  /// descriptor says.
  pub fn configure(&self, options: TaskOptions) -> anyhow::Result<Arc<JobHandle>> {
    let task = normalize_task(options, self.host.as_ref())?;
    self.configure_normalized(&task)
  }

  fn configure_normalized(&self, task: &NormalizedTaskOptions) -> anyhow::Result<Arc<JobHandle>> {
    let is_production = self.host.is_production();

    self.registry.get_or_configure(&task.id, || {
      let config = compose_config(task, is_production, &self.options.loaders);
      debug!(
        job = %task.id,
        mode = %config.mode,
        entry = %config.entry.display(),
        "Composed configuration"
      );
      let job = self
        .engine
        .create_job(&config)
        .with_context(|| format!("Bundler engine rejected the configuration of `{}`", task.id))?;
      Ok(JobHandle::new(task.id.clone(), config, job))
    })
  }

  /// Starts a run of the task and returns without waiting for it. Once the run finishes the
  /// report goes to the host, then `on_complete` fires, for failed runs too.
  ///
  /// The report names the source and destination of this call's descriptor, even when the job
  /// was configured by an earlier one.
  ///
  /// Configuration errors are returned directly and nothing is run. Must be called within a
  /// tokio runtime.
  pub fn execute(
    &self,
    task_name: &str,
    options: TaskOptions,
    on_complete: Option<OnComplete>,
  ) -> anyhow::Result<JoinHandle<TaskReport>> {
    let task = normalize_task(options, self.host.as_ref())?;
    let handle = self.configure_normalized(&task)?;
    let paths = task.paths;
    let host = Arc::clone(&self.host);
    let overlap = self.options.overlap;
    let task_name = task_name.to_string();

    Ok(tokio::spawn(async move {
      let result = AssertUnwindSafe(handle.run(overlap)).catch_unwind().await.unwrap_or_else(
        |_| Err(BuildError::from(anyhow::anyhow!("Job `{}` panicked", handle.id()))),
      );

      let report = make_report(task_name, &paths, handle.config(), &result);
      host.report(&report);
      if let Some(on_complete) = on_complete {
        on_complete();
      }
      report
    }))
  }

  /// [`TaskRunner::execute`] and wait for the report.
  pub async fn run_task(
    &self,
    task_name: &str,
    options: TaskOptions,
  ) -> anyhow::Result<TaskReport> {
    let handle = self.execute(task_name, options, None)?;
    handle.await.context("Task run was aborted")
  }
}

fn make_report(
  task_name: String,
  paths: &ResolvedPaths,
  config: &BundlerConfig,
  result: &BuildResult<JobStats>,
) -> TaskReport {
  let src = paths.entry().to_slash_string();
  let dest = paths.output_file().to_slash_string();

  let outcome = match result {
    Ok(stats) => {
      debug!(
        task = %task_name,
        elapsed = ?stats.elapsed,
        warnings = stats.warnings.len(),
        "Run succeeded"
      );
      TaskOutcome::Success { characteristics: config.characteristics() }
    }
    Err(errors) => {
      for err in errors.iter() {
        error!(task = %task_name, %src, %dest, "{err:?}");
      }
      TaskOutcome::Failure
    }
  };

  TaskReport { task_name, src, dest, outcome }
}
