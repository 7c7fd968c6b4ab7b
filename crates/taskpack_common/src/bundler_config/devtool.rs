use serde::{Serialize, Serializer};

use crate::SourceMapKind;

/// Source map generation of a bundle. Serializes to `false`, `"inline-source-map"` or
/// `"source-map"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Devtool {
  Off,
  InlineSourceMap,
  SourceMap,
}

impl Devtool {
  pub fn new(enabled: bool, kind: SourceMapKind) -> Self {
    match (enabled, kind) {
      (false, _) => Self::Off,
      (true, SourceMapKind::Inline) => Self::InlineSourceMap,
      (true, SourceMapKind::File) => Self::SourceMap,
    }
  }

  pub fn is_enabled(self) -> bool {
    !matches!(self, Self::Off)
  }

  pub fn source_map_kind(self) -> Option<SourceMapKind> {
    match self {
      Self::Off => None,
      Self::InlineSourceMap => Some(SourceMapKind::Inline),
      Self::SourceMap => Some(SourceMapKind::File),
    }
  }
}

impl Serialize for Devtool {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::Off => serializer.serialize_bool(false),
      Self::InlineSourceMap => serializer.serialize_str("inline-source-map"),
      Self::SourceMap => serializer.serialize_str("source-map"),
    }
  }
}

#[test]
fn test_devtool_serialization() {
  assert_eq!(serde_json::to_string(&Devtool::Off).unwrap(), "false");
  assert_eq!(serde_json::to_string(&Devtool::InlineSourceMap).unwrap(), r#""inline-source-map""#);
  assert_eq!(serde_json::to_string(&Devtool::SourceMap).unwrap(), r#""source-map""#);
  assert_eq!(Devtool::new(false, SourceMapKind::File), Devtool::Off);
}
