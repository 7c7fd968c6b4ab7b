use anyhow::Context;
use taskpack_common::{JobId, NormalizedTaskOptions, OptionsError, ResolvedPaths, TaskOptions};
use taskpack_resolver::PathResolver;

pub fn normalize_task<R: PathResolver + ?Sized>(
  raw_options: TaskOptions,
  resolver: &R,
) -> anyhow::Result<NormalizedTaskOptions> {
  let from = required(raw_options.from, "from")?;
  let to = required(raw_options.to, "to")?;

  let path_from =
    resolver.resolve_path(&from).with_context(|| format!("Failed to resolve `from` {from:?}"))?;
  let path_to =
    resolver.resolve_path(&to).with_context(|| format!("Failed to resolve `to` {to:?}"))?;

  let id = raw_options
    .name
    .as_deref()
    .filter(|name| !name.is_empty())
    .map_or_else(|| JobId::from_path(&path_from), JobId::named);

  Ok(NormalizedTaskOptions {
    id,
    paths: ResolvedPaths::new(&path_from, &path_to)?,
    full: raw_options.full.unwrap_or(false),
    source_map: raw_options.source_map.unwrap_or(true),
    source_map_kind: raw_options.source_map_type.unwrap_or_default(),
  })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, OptionsError> {
  value.filter(|value| !value.trim().is_empty()).ok_or(OptionsError::MissingField(field))
}
