mod engine;
mod host;
mod registry;
mod runner;
mod types;
mod utils;

pub use crate::{
  engine::{BundlerEngine, CommandEngine, CompiledJob},
  host::{TaskHost, TracingHost},
  registry::{
    job_handle::{JobHandle, JobState},
    JobRegistry,
  },
  runner::{RunnerOptions, TaskRunner},
  types::{OnComplete, SharedEngine, SharedHost},
  utils::{
    compose_config::{compose, compose_config},
    normalize_task::normalize_task,
  },
};
pub use taskpack_common::*;
pub use taskpack_error::{BuildError, BuildResult};
pub use taskpack_resolver::{PathResolver, ProjectRoot, ResolveError};
