mod command_engine;

use async_trait::async_trait;
use taskpack_common::{BundlerConfig, JobStats};
use taskpack_error::BuildResult;

pub use command_engine::CommandEngine;

/// The bundler doing the actual work. A job is created once per configuration and may be run
/// any number of times afterwards.
pub trait BundlerEngine: Send + Sync {
  /// Errors here mean the engine refused the configuration; they are not run failures.
  ///
  /// Called while the registry entry of the job is locked: it must not re-enter the runner or
  /// its registry.
  fn create_job(&self, config: &BundlerConfig) -> anyhow::Result<Box<dyn CompiledJob>>;
}

#[async_trait]
pub trait CompiledJob: Send + Sync {
  async fn run(&self) -> BuildResult<JobStats>;
}
