pub mod build_mode;
pub mod condition;
pub mod devtool;
pub mod es_target;
pub mod loader_names;
pub mod module_rule;
pub mod optimization;

use std::path::PathBuf;

use serde::Serialize;

use crate::{BuildMode, Devtool, ModuleRule, Optimization};

/// Everything the bundler engine needs to build one job. Composed once per job identity and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundlerConfig {
  pub entry: PathBuf,
  pub output: OutputConfig,
  pub module: ModuleConfig,
  pub devtool: Devtool,
  pub mode: BuildMode,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub optimization: Option<Optimization>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputConfig {
  pub path: PathBuf,
  pub filename: String,
  /// Emit module path comments into the bundle. Development aid only.
  pub pathinfo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleConfig {
  pub rules: Vec<ModuleRule>,
}

impl BundlerConfig {
  pub fn output_file(&self) -> PathBuf {
    self.output.path.join(&self.output.filename)
  }

  pub fn is_compressed(&self) -> bool {
    self.optimization.is_some()
  }

  /// Human readable list of what this configuration applies, in report order.
  pub fn characteristics(&self) -> Vec<String> {
    let mut list = Vec::with_capacity(2);
    if let Some(kind) = self.devtool.source_map_kind() {
      list.push(format!("Source map: {kind}"));
    }
    if self.is_compressed() {
      list.push("Compress".to_string());
    }
    list
  }
}
