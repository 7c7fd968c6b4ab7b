use serde::{Serialize, Serializer};

use crate::ESTarget;

/// Production-only block: minification plus async code splitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
  pub minimize: bool,
  pub minimizer: Vec<MinimizerOptions>,
  pub split_chunks: SplitChunks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimizerOptions {
  /// Lookup name of the minifier strategy.
  pub name: String,
  pub parse: ParseOptions,
  pub compress: CompressOptions,
  pub mangle: MangleOptions,
  pub output: MinimizerOutputOptions,
  /// Number of parallel workers.
  pub parallel: usize,
  pub cache: bool,
  pub source_map: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParseOptions {
  pub ecma: ESTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompressOptions {
  pub ecma: ESTarget,
  pub warnings: bool,
  pub comparisons: bool,
  pub inline: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MangleOptions {
  pub safari10: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinimizerOutputOptions {
  pub ecma: ESTarget,
  pub comments: bool,
  pub ascii_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitChunks {
  pub chunks: ChunkSelection,
  /// `None` leaves chunk naming to the engine and serializes as `false`.
  #[serde(serialize_with = "serialize_chunk_name")]
  pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
  /// Only chunks reached through dynamic imports.
  Async,
}

#[allow(clippy::ref_option)]
fn serialize_chunk_name<S: Serializer>(
  name: &Option<String>,
  serializer: S,
) -> Result<S::Ok, S::Error> {
  match name {
    Some(name) => serializer.serialize_str(name),
    None => serializer.serialize_bool(false),
  }
}

#[test]
fn test_split_chunks_serialization() {
  let split = SplitChunks { chunks: ChunkSelection::Async, name: None };
  assert_eq!(serde_json::to_string(&split).unwrap(), r#"{"chunks":"async","name":false}"#);
}
