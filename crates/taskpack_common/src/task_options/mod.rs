pub mod normalized_task_options;
pub mod source_map_kind;

use serde::Deserialize;

use crate::SourceMapKind;

/// A build task as the host task runner declares it. Every field is optional here; the
/// required ones (`from`, `to`) are checked when the task is normalized.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskOptions {
  pub from: Option<String>,
  pub to: Option<String>,
  /// Explicit job identity. Falls back to the resolved source path.
  pub name: Option<String>,
  /// Skip compression even in production.
  pub full: Option<bool>,
  pub source_map: Option<bool>,
  pub source_map_type: Option<SourceMapKind>,
}

impl TaskOptions {
  pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
    Self { from: Some(from.into()), to: Some(to.into()), ..Default::default() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_task_table() {
    let options: TaskOptions = toml::from_str(
      r#"
        from = "src/app.js"
        to = "dist/"
        name = "app"
        source_map_type = "source-map"
      "#,
    )
    .unwrap();

    assert_eq!(options.from.as_deref(), Some("src/app.js"));
    assert_eq!(options.name.as_deref(), Some("app"));
    assert_eq!(options.full, None);
    assert_eq!(options.source_map_type, Some(SourceMapKind::File));
  }

  #[test]
  fn rejects_unknown_source_map_type() {
    let result = toml::from_str::<TaskOptions>(
      r#"
        from = "src/app.js"
        to = "dist/"
        source_map_type = "eval"
      "#,
    );
    assert!(result.is_err());
  }

  #[test]
  fn rejects_unknown_fields() {
    let result = serde_json::from_str::<TaskOptions>(r#"{ "from": "a.js", "babel": true }"#);
    assert!(result.is_err());
  }
}
