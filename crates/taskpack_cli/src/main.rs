mod args;
mod config;
mod host;
mod types;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
  time::Instant,
};

use ansi_term::Colour;
use anyhow::Context;
use args::{BuildArgs, InputArgs};
use clap::Parser;
use config::{compose_all, select_tasks, task_name, TaskFile};
use host::ConsoleHost;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use taskpack::{CommandEngine, JobRegistry, RunnerOptions, TaskOptions, TaskRunner};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  build: BuildArgs,
}

fn project_root(input: &InputArgs, file: &TaskFile) -> anyhow::Result<PathBuf> {
  let cwd = std::env::current_dir().context("Failed to read the current directory")?;
  if let Some(root) = &input.root {
    return Ok(cwd.join(root));
  }

  let base = cwd.join(input.config.parent().unwrap_or(Path::new("")));
  Ok(match &file.root {
    Some(root) => base.join(root),
    None => base,
  })
}

fn print_configs(
  tasks: Vec<TaskOptions>,
  host: &ConsoleHost,
  production: bool,
  file: &TaskFile,
) -> anyhow::Result<()> {
  let configs = compose_all(tasks, host, production, &file.loaders)?;
  println!("{}", serde_json::to_string_pretty(&configs)?);
  Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_target(false)
    .init();

  let args = Commands::parse();
  let file = TaskFile::load(&args.input.config)?;
  let root = project_root(&args.input, &file)?;
  let production = args.build.production || file.production;
  let tasks = select_tasks(file.tasks.clone(), args.input.only.as_deref())?;
  debug!(root = %root.display(), production, tasks = tasks.len(), "Loaded task file");

  let host = ConsoleHost::new(root.clone(), production);
  if args.build.print_config {
    return print_configs(tasks, &host, production, &file);
  }

  let engine_config = file.engine.as_ref().context("The task file has no [engine] table")?;
  let engine = CommandEngine::new(engine_config.program.clone())
    .args(engine_config.args.iter().cloned())
    .cwd(&root);
  let runner =
    TaskRunner::new(Arc::new(engine), Arc::new(host), Arc::new(JobRegistry::new())).with_options(
      RunnerOptions {
        overlap: args.build.overlap.map_or(file.overlap, Into::into),
        loaders: file.loaders.clone(),
      },
    );

  let start = Instant::now();
  let mut pending = Vec::with_capacity(tasks.len());
  for task in tasks {
    let name = task_name(&task);
    pending.push(runner.execute(&name, task, None)?);
  }
  let reports = futures::future::try_join_all(pending).await?;

  let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
  let failed = reports.iter().filter(|report| !report.is_success()).count();
  if failed > 0 {
    anyhow::bail!("{failed} of {} tasks failed", reports.len());
  }

  println!("\n{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));
  Ok(())
}
