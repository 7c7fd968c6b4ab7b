use std::path::PathBuf;

use clap::Args;

use crate::types::overlap_policy::OverlapPolicy;

#[derive(Args)]
pub struct InputArgs {
  /// Task file to load; `.json` files are read as JSON, anything else as TOML.
  #[clap(long, short = 'c', default_value = "taskpack.toml")]
  pub config: PathBuf,

  /// Project root task paths are resolved against. Defaults to the task file's `root`.
  #[clap(long)]
  pub root: Option<PathBuf>,

  /// Only run the named tasks.
  #[clap(long, action = clap::ArgAction::Append)]
  pub only: Option<Vec<String>>,
}

#[derive(Args)]
pub struct BuildArgs {
  /// Build for production: no source maps, minified output.
  #[clap(long, short = 'p')]
  pub production: bool,

  #[clap(long)]
  pub overlap: Option<OverlapPolicy>,

  /// Print the composed bundler configurations as JSON instead of running them.
  #[clap(long)]
  pub print_config: bool,
}
