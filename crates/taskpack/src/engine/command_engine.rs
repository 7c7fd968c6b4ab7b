use std::{io::ErrorKind, path::PathBuf, process::Stdio, sync::Arc, time::Instant};

use anyhow::Context;
use async_trait::async_trait;
use taskpack_common::{BundlerConfig, JobStats};
use taskpack_error::BuildResult;
use tokio::{io::AsyncWriteExt, process::Command};

use super::{BundlerEngine, CompiledJob};

/// Drives an external bundler program. Each run spawns the program and writes the job's
/// configuration, serialized as JSON, to its stdin.
#[derive(Debug, Clone)]
pub struct CommandEngine {
  program: String,
  args: Vec<String>,
  cwd: Option<PathBuf>,
}

impl CommandEngine {
  pub fn new(program: impl Into<String>) -> Self {
    Self { program: program.into(), args: Vec::new(), cwd: None }
  }

  #[must_use]
  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  #[must_use]
  pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
    self.cwd = Some(cwd.into());
    self
  }
}

impl BundlerEngine for CommandEngine {
  fn create_job(&self, config: &BundlerConfig) -> anyhow::Result<Box<dyn CompiledJob>> {
    let payload = serde_json::to_vec(config).context("Failed to serialize bundler configuration")?;
    Ok(Box::new(CommandJob { engine: self.clone(), payload: payload.into() }))
  }
}

struct CommandJob {
  engine: CommandEngine,
  payload: Arc<[u8]>,
}

#[async_trait]
impl CompiledJob for CommandJob {
  async fn run(&self) -> BuildResult<JobStats> {
    let CommandEngine { program, args, cwd } = &self.engine;
    let start = Instant::now();

    let mut command = Command::new(program);
    command.args(args).stdin(Stdio::piped()).stdout(Stdio::piped()).stderr(Stdio::piped());
    if let Some(cwd) = cwd {
      command.current_dir(cwd);
    }

    let mut child = command.spawn().with_context(|| format!("Failed to spawn `{program}`"))?;

    if let Some(mut stdin) = child.stdin.take() {
      match stdin.write_all(&self.payload).await {
        // The program may legitimately exit without reading its configuration.
        Err(err) if err.kind() != ErrorKind::BrokenPipe => {
          let err = anyhow::Error::new(err).context(format!("Failed to write to `{program}`"));
          return Err(err.into());
        }
        _ => {}
      }
    }

    let output =
      child.wait_with_output().await.with_context(|| format!("Failed to wait on `{program}`"))?;
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
      let err = anyhow::anyhow!("`{program}` exited with {}: {}", output.status, stderr.trim());
      return Err(err.into());
    }

    Ok(JobStats {
      elapsed: start.elapsed(),
      output: stdout,
      warnings: stderr.lines().filter(|line| !line.trim().is_empty()).map(String::from).collect(),
    })
  }
}

#[cfg(all(test, unix))]
mod tests {
  use taskpack_common::TaskOptions;
  use taskpack_resolver::ProjectRoot;

  use super::*;
  use crate::{compose, normalize_task};

  fn config() -> BundlerConfig {
    let task =
      normalize_task(TaskOptions::new("src/app.js", "dist/"), &ProjectRoot::new("/srv/app"))
        .unwrap();
    compose(&task, false)
  }

  #[tokio::test]
  async fn pipes_configuration_to_program() {
    let engine = CommandEngine::new("sh").args(["-c", "cat"]);
    let job = engine.create_job(&config()).unwrap();

    let stats = job.run().await.unwrap();
    let echoed: serde_json::Value = serde_json::from_str(&stats.output).unwrap();
    assert_eq!(echoed["entry"], "/srv/app/src/app.js");
    assert_eq!(echoed["devtool"], "inline-source-map");
    assert!(stats.warnings.is_empty());
  }

  #[tokio::test]
  async fn job_can_run_repeatedly() {
    let engine = CommandEngine::new("sh").args(["-c", "cat > /dev/null"]);
    let job = engine.create_job(&config()).unwrap();
    job.run().await.unwrap();
    job.run().await.unwrap();
  }

  #[tokio::test]
  async fn non_zero_exit_is_a_run_error() {
    let engine = CommandEngine::new("sh")
      .args(["-c", "cat > /dev/null; echo \"Module not found: ./missing\" >&2; exit 3"]);
    let job = engine.create_job(&config()).unwrap();

    let errors = job.run().await.unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("Module not found: ./missing"));
  }

  #[tokio::test]
  async fn missing_program_is_a_run_error() {
    let job = CommandEngine::new("taskpack-no-such-bundler").create_job(&config()).unwrap();
    let errors = job.run().await.unwrap_err();
    assert!(errors[0].to_string().contains("Failed to spawn"));
  }
}
