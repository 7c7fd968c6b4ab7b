use std::sync::Arc;

use crate::{BundlerEngine, TaskHost};

pub type SharedEngine = Arc<dyn BundlerEngine>;
pub type SharedHost = Arc<dyn TaskHost>;

/// Fired once per `execute` call, after the task report has been emitted.
pub type OnComplete = Box<dyn FnOnce() + Send + 'static>;
