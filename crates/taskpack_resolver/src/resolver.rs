use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

use crate::ResolveError;

/// Turns a path as written in a task descriptor into the path the bundler works with.
pub trait PathResolver: Send + Sync {
  fn resolve_path(&self, path: &str) -> Result<PathBuf, ResolveError>;
}

/// Resolves relative paths against a fixed project root. Absolute paths are only normalized.
#[derive(Debug, Clone)]
pub struct ProjectRoot {
  root: PathBuf,
}

impl ProjectRoot {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }
}

impl PathResolver for ProjectRoot {
  fn resolve_path(&self, path: &str) -> Result<PathBuf, ResolveError> {
    if path.trim().is_empty() {
      return Err(ResolveError::Empty);
    }
    if path.contains('\0') {
      return Err(ResolveError::NulByte(path.to_string()));
    }

    let path = Path::new(path);
    if path.is_absolute() {
      Ok(path.normalize())
    } else {
      Ok(self.root.join(path).normalize())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resolves_relative_to_root() {
    let root = ProjectRoot::new("/srv/app");
    assert_eq!(root.resolve_path("src/app.js").unwrap(), PathBuf::from("/srv/app/src/app.js"));
    assert_eq!(root.resolve_path("./dist/").unwrap(), PathBuf::from("/srv/app/dist"));
    assert_eq!(
      root.resolve_path("src/../lib/index.js").unwrap(),
      PathBuf::from("/srv/app/lib/index.js")
    );
  }

  #[test]
  fn keeps_absolute_paths() {
    let root = ProjectRoot::new("/srv/app");
    assert_eq!(root.resolve_path("/opt/shared/a.js").unwrap(), PathBuf::from("/opt/shared/a.js"));
  }

  #[test]
  fn rejects_malformed_paths() {
    let root = ProjectRoot::new("/srv/app");
    assert_eq!(root.resolve_path("   "), Err(ResolveError::Empty));
    assert!(matches!(root.resolve_path("src/\0.js"), Err(ResolveError::NulByte(_))));
  }
}
