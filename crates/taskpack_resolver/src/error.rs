use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
  #[error("path must not be empty")]
  Empty,
  #[error("path {0:?} contains a NUL byte")]
  NulByte(String),
}
