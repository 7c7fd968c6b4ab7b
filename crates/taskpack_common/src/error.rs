use std::path::PathBuf;

use thiserror::Error;

/// A task descriptor that cannot be turned into a bundling job.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
  #[error("task option `{0}` is required")]
  MissingField(&'static str),
  #[error("source path {0:?} does not name a file")]
  MissingFileName(PathBuf),
}
