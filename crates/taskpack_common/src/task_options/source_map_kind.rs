use std::fmt::Display;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SourceMapKind {
  /// Embedded into the bundle as a data url.
  #[default]
  #[serde(rename = "inline")]
  Inline,
  /// Written next to the bundle as a separate `.map` file.
  #[serde(rename = "source-map", alias = "file")]
  File,
}

impl Display for SourceMapKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Inline => write!(f, "inline"),
      Self::File => write!(f, "file"),
    }
  }
}
