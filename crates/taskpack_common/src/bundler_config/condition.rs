use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{ser::SerializeMap, Serialize, Serializer};
use taskpack_utils::path_ext::PathExt;

/// A module path matcher used by rule `test` and `exclude` lists.
#[derive(Debug, Clone)]
pub enum Condition {
  /// Matches anywhere in the slash-separated module path.
  Pattern(Regex),
  /// Matches every module below this directory.
  Directory(PathBuf),
}

impl Condition {
  pub fn matches(&self, path: &Path) -> bool {
    match self {
      Self::Pattern(re) => re.is_match(&path.to_slash_string()),
      Self::Directory(dir) => path.starts_with(dir),
    }
  }
}

impl PartialEq for Condition {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
      (Self::Directory(a), Self::Directory(b)) => a == b,
      _ => false,
    }
  }
}

impl Serialize for Condition {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    match self {
      Self::Pattern(re) => map.serialize_entry("regex", re.as_str())?,
      Self::Directory(dir) => map.serialize_entry("directory", dir)?,
    }
    map.end()
  }
}

#[test]
fn test_condition_matches() {
  let node_modules = Condition::Pattern(Regex::new("node_modules").unwrap());
  assert!(node_modules.matches(Path::new("/srv/app/node_modules/lodash/index.js")));
  assert!(!node_modules.matches(Path::new("/srv/app/src/index.js")));

  let dist = Condition::Directory(PathBuf::from("/srv/app/dist"));
  assert!(dist.matches(Path::new("/srv/app/dist/app.js")));
  assert!(!dist.matches(Path::new("/srv/app/distribution/app.js")));

  assert_eq!(serde_json::to_string(&dist).unwrap(), r#"{"directory":"/srv/app/dist"}"#);
}
