use crate::{JobId, ResolvedPaths, SourceMapKind};

#[derive(Debug, Clone)]
pub struct NormalizedTaskOptions {
  pub id: JobId,
  pub paths: ResolvedPaths,
  pub full: bool,
  pub source_map: bool,
  pub source_map_kind: SourceMapKind,
}

impl NormalizedTaskOptions {
  /// Production builds never emit source maps, whatever the task asked for.
  pub fn source_maps_enabled(&self, is_production: bool) -> bool {
    self.source_map && !is_production
  }

  pub fn is_compressed(&self, is_production: bool) -> bool {
    is_production && !self.full
  }
}
