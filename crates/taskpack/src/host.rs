use std::path::PathBuf;

use taskpack_common::{TaskOutcome, TaskReport};
use taskpack_resolver::{PathResolver, ProjectRoot, ResolveError};
use tracing::{error, info};

/// The task runner embedding taskpack: it resolves task paths, decides whether this is a
/// production build and receives the report of every finished task.
pub trait TaskHost: PathResolver {
  fn is_production(&self) -> bool;

  fn report(&self, report: &TaskReport);
}

/// A host that resolves paths against a project root and reports through `tracing`.
#[derive(Debug, Clone)]
pub struct TracingHost {
  root: ProjectRoot,
  production: bool,
}

impl TracingHost {
  pub fn new(root: impl Into<PathBuf>, production: bool) -> Self {
    Self { root: ProjectRoot::new(root), production }
  }
}

impl PathResolver for TracingHost {
  fn resolve_path(&self, path: &str) -> Result<PathBuf, ResolveError> {
    self.root.resolve_path(path)
  }
}

impl TaskHost for TracingHost {
  fn is_production(&self) -> bool {
    self.production
  }

  fn report(&self, report: &TaskReport) {
    let TaskReport { task_name, src, dest, outcome } = report;
    match outcome {
      TaskOutcome::Success { characteristics } => {
        let applied = characteristics.join(", ");
        info!(task = %task_name, %src, %dest, %applied, "Task finished");
      }
      TaskOutcome::Failure => {
        error!(task = %task_name, %src, %dest, "Task failed");
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tracing_host_resolves_against_its_root() {
    let host = TracingHost::new("/srv/app", true);
    assert!(host.is_production());
    assert_eq!(host.resolve_path("src/app.js").unwrap(), PathBuf::from("/srv/app/src/app.js"));

    host.report(&TaskReport {
      task_name: "webpack".to_string(),
      src: "/srv/app/src/app.js".to_string(),
      dest: "/srv/app/dist/app.js".to_string(),
      outcome: TaskOutcome::Failure,
    });
  }
}
