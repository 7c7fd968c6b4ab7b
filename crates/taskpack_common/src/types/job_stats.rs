use std::time::Duration;

/// What the bundler engine hands back after a successful run.
#[derive(Debug, Default, Clone)]
pub struct JobStats {
  pub elapsed: Duration,
  pub output: String,
  pub warnings: Vec<String>,
}
