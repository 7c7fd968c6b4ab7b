use std::path::Path;

use serde::Serialize;

use crate::Condition;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleRule {
  Parser { parser: ParserOptions },
  Transform(TransformRule),
}

impl ModuleRule {
  pub fn as_transform(&self) -> Option<&TransformRule> {
    match self {
      Self::Transform(rule) => Some(rule),
      Self::Parser { .. } => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
  /// Hint chunks for `require.ensure` style dynamic imports.
  pub require_ensure: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformRule {
  pub test: Condition,
  pub exclude: Vec<Condition>,
  /// Applied last to first, like any loader chain.
  #[serde(rename = "use")]
  pub loaders: Vec<LoaderUse>,
}

impl TransformRule {
  pub fn applies_to(&self, path: &Path) -> bool {
    self.test.matches(path) && !self.exclude.iter().any(|condition| condition.matches(path))
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderUse {
  pub loader: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<serde_json::Value>,
}

impl LoaderUse {
  pub fn new(loader: &str) -> Self {
    Self { loader: loader.to_string(), options: None }
  }

  pub fn with_options(loader: &str, options: serde_json::Value) -> Self {
    Self { loader: loader.to_string(), options: Some(options) }
  }
}
