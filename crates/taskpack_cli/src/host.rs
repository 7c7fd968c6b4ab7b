use std::path::PathBuf;

use ansi_term::Colour;
use taskpack::{PathResolver, ProjectRoot, ResolveError, TaskHost, TaskOutcome, TaskReport};

/// Prints one line per finished task.
pub struct ConsoleHost {
  root: ProjectRoot,
  production: bool,
}

impl ConsoleHost {
  pub fn new(root: PathBuf, production: bool) -> Self {
    Self { root: ProjectRoot::new(root), production }
  }
}

impl PathResolver for ConsoleHost {
  fn resolve_path(&self, path: &str) -> Result<PathBuf, ResolveError> {
    self.root.resolve_path(path)
  }
}

impl TaskHost for ConsoleHost {
  fn is_production(&self) -> bool {
    self.production
  }

  fn report(&self, report: &TaskReport) {
    let TaskReport { task_name, src, dest, outcome } = report;
    let dim = Colour::White.dimmed();

    match outcome {
      TaskOutcome::Success { characteristics } => {
        let applied = if characteristics.is_empty() {
          String::new()
        } else {
          format!(" ({})", characteristics.join(", "))
        };
        println!(
          "{} {} {}{}{}{}",
          Colour::Green.paint("✔"),
          Colour::Cyan.paint(task_name),
          dim.paint(src),
          dim.paint(" → "),
          dest,
          dim.paint(applied),
        );
      }
      TaskOutcome::Failure => {
        println!(
          "{} {} {}{}{} {}",
          Colour::Red.paint("✘"),
          Colour::Cyan.paint(task_name),
          dim.paint(src),
          dim.paint(" → "),
          dest,
          Colour::Red.paint("failed"),
        );
      }
    }
  }
}
