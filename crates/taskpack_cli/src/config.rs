use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use taskpack::{
  compose_config, normalize_task, LoaderNames, OverlapPolicy, PathResolver, TaskOptions,
};
use tracing::debug;

/// Contents of a `taskpack.toml` (or `.json`) task file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskFile {
  #[serde(default)]
  pub production: bool,
  /// Relative to the directory of the task file.
  pub root: Option<PathBuf>,
  pub engine: Option<EngineConfig>,
  #[serde(default)]
  pub overlap: OverlapPolicy,
  #[serde(default)]
  pub loaders: LoaderNames,
  #[serde(default, rename = "task")]
  pub tasks: Vec<TaskOptions>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
  pub program: String,
  #[serde(default)]
  pub args: Vec<String>,
}

impl TaskFile {
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Self::parse(&content, path.extension().is_some_and(|ext| ext == "json"))
      .with_context(|| format!("Failed to parse {}", path.display()))
  }

  fn parse(content: &str, is_json: bool) -> anyhow::Result<Self> {
    if is_json {
      Ok(serde_json::from_str(content)?)
    } else {
      Ok(toml::from_str(content)?)
    }
  }
}

/// Name a task is reported under: its job name, or its source path.
pub fn task_name(task: &TaskOptions) -> String {
  task
    .name
    .as_deref()
    .filter(|name| !name.is_empty())
    .or(task.from.as_deref())
    .unwrap_or("<unnamed>")
    .to_string()
}

pub fn select_tasks(
  tasks: Vec<TaskOptions>,
  only: Option<&[String]>,
) -> anyhow::Result<Vec<TaskOptions>> {
  let Some(only) = only else {
    return Ok(tasks);
  };

  if let Some(unknown) = only.iter().find(|name| !tasks.iter().any(|task| task_name(task) == **name))
  {
    anyhow::bail!("Unknown task `{unknown}`");
  }

  Ok(tasks.into_iter().filter(|task| only.contains(&task_name(task))).collect())
}

/// Composed configuration of every distinct job, keyed by identity. A task whose identity is
/// already taken is skipped, as the run would reuse the first configuration.
pub fn compose_all<R: PathResolver + ?Sized>(
  tasks: Vec<TaskOptions>,
  resolver: &R,
  production: bool,
  loaders: &LoaderNames,
) -> anyhow::Result<serde_json::Map<String, serde_json::Value>> {
  let mut configs = serde_json::Map::with_capacity(tasks.len());
  for options in tasks {
    let task = normalize_task(options, resolver)?;
    let id = task.id.to_string();
    if configs.contains_key(&id) {
      debug!(job = %id, "Skipping task with an already configured identity");
      continue;
    }
    let config = compose_config(&task, production, loaders);
    configs.insert(id, serde_json::to_value(&config)?);
  }
  Ok(configs)
}

#[cfg(test)]
mod tests {
  use taskpack::ProjectRoot;

  use super::*;

  const TASK_FILE: &str = r#"
    production = true
    root = "web"
    overlap = "reject"

    [engine]
    program = "node"
    args = ["scripts/bundle.js"]

    [loaders]
    script = "babel-loader"

    [[task]]
    name = "app"
    from = "src/app.js"
    to = "dist/"

    [[task]]
    from = "src/admin.js"
    to = "dist/admin.min.js"
    full = true
    source_map_type = "source-map"
  "#;

  #[test]
  fn parses_toml_task_file() {
    let file = TaskFile::parse(TASK_FILE, false).unwrap();
    assert!(file.production);
    assert_eq!(file.root, Some(PathBuf::from("web")));
    assert_eq!(file.overlap, OverlapPolicy::Reject);
    assert_eq!(file.engine.as_ref().unwrap().args, ["scripts/bundle.js"]);
    assert_eq!(file.loaders.script, "babel-loader");
    assert_eq!(file.loaders.css, "css-loader");
    assert_eq!(file.tasks.len(), 2);
    assert_eq!(file.tasks[1].full, Some(true));
  }

  #[test]
  fn parses_json_task_file() {
    let file = TaskFile::parse(r#"{ "task": [{ "from": "src/app.js", "to": "dist/" }] }"#, true)
      .unwrap();
    assert!(!file.production);
    assert!(file.engine.is_none());
    assert_eq!(file.overlap, OverlapPolicy::Queue);
    assert_eq!(task_name(&file.tasks[0]), "src/app.js");
  }

  #[test]
  fn rejects_unknown_keys() {
    assert!(TaskFile::parse("watch = true", false).is_err());
  }

  #[test]
  fn first_task_of_an_identity_wins() {
    let file = TaskFile::parse(
      r#"
        [[task]]
        name = "bundle"
        from = "src/app.js"
        to = "dist/"

        [[task]]
        name = "bundle"
        from = "src/admin.js"
        to = "dist/"
        full = true

        [[task]]
        from = "src/vendor.js"
        to = "dist/"
      "#,
      false,
    )
    .unwrap();

    let root = ProjectRoot::new("/srv/app");
    let configs = compose_all(file.tasks, &root, true, &file.loaders).unwrap();

    assert_eq!(configs.len(), 2);
    assert_eq!(configs["bundle"]["entry"], "/srv/app/src/app.js");
    assert_eq!(configs["bundle"]["mode"], "production");
    assert_eq!(configs["/srv/app/src/vendor.js"]["entry"], "/srv/app/src/vendor.js");
  }

  #[test]
  fn selects_named_tasks() {
    let tasks = TaskFile::parse(TASK_FILE, false).unwrap().tasks;

    let all = select_tasks(tasks.clone(), None).unwrap();
    assert_eq!(all.len(), 2);

    let only = select_tasks(tasks.clone(), Some(&["src/admin.js".to_string()][..])).unwrap();
    assert_eq!(only.len(), 1);
    assert_eq!(task_name(&only[0]), "src/admin.js");

    let err = select_tasks(tasks, Some(&["vendor".to_string()][..])).unwrap_err();
    assert_eq!(err.to_string(), "Unknown task `vendor`");
  }
}
