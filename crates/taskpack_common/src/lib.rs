mod bundler_config;
mod error;
mod task_options;
mod types;

pub use bundler_config::{
  build_mode::BuildMode,
  condition::Condition,
  devtool::Devtool,
  es_target::ESTarget,
  loader_names::LoaderNames,
  module_rule::{LoaderUse, ModuleRule, ParserOptions, TransformRule},
  optimization::{
    ChunkSelection, CompressOptions, MangleOptions, MinimizerOptions, MinimizerOutputOptions,
    Optimization, ParseOptions, SplitChunks,
  },
  BundlerConfig, ModuleConfig, OutputConfig,
};

pub use crate::{
  error::OptionsError,
  task_options::{
    normalized_task_options::NormalizedTaskOptions, source_map_kind::SourceMapKind, TaskOptions,
  },
  types::{
    job_id::JobId,
    job_stats::JobStats,
    overlap_policy::OverlapPolicy,
    resolved_paths::ResolvedPaths,
    task_report::{TaskOutcome, TaskReport},
  },
};
