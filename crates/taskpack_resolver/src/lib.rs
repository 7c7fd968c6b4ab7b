// Resolution of task paths against the project root supplied by the host task runner.

mod error;
mod resolver;

pub use crate::{
  error::ResolveError,
  resolver::{PathResolver, ProjectRoot},
};
