use std::path::{Path, PathBuf};

use taskpack_utils::path_ext::PathExt;

use crate::OptionsError;

/// Source and destination of a task, split into directory and file name.
///
/// The destination is a directory unless it carries an extension; a directory destination
/// keeps the source file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
  pub dir_from: PathBuf,
  pub filename_from: String,
  pub dir_to: PathBuf,
  pub filename_to: String,
}

impl ResolvedPaths {
  pub fn new(from: &Path, to: &Path) -> Result<Self, OptionsError> {
    let (dir_from, filename_from) =
      from.split_file_name().ok_or_else(|| OptionsError::MissingFileName(from.to_path_buf()))?;

    let (dir_to, filename_to) = match to.split_file_name().filter(|_| to.has_extension()) {
      Some((dir, filename)) => (dir.to_path_buf(), filename.into_owned()),
      None => (to.to_path_buf(), filename_from.to_string()),
    };

    Ok(Self {
      dir_from: dir_from.to_path_buf(),
      filename_from: filename_from.into_owned(),
      dir_to,
      filename_to,
    })
  }

  pub fn entry(&self) -> PathBuf {
    self.dir_from.join(&self.filename_from)
  }

  pub fn output_file(&self) -> PathBuf {
    self.dir_to.join(&self.filename_to)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn directory_destination_keeps_source_file_name() {
    let paths = ResolvedPaths::new(Path::new("src/app.js"), Path::new("dist/")).unwrap();
    assert_eq!(paths.dir_from, Path::new("src"));
    assert_eq!(paths.filename_from, "app.js");
    assert_eq!(paths.dir_to, Path::new("dist/"));
    assert_eq!(paths.filename_to, "app.js");
    assert_eq!(paths.output_file(), Path::new("dist/app.js"));
  }

  #[test]
  fn file_destination_overrides_file_name() {
    let paths = ResolvedPaths::new(Path::new("src/app.js"), Path::new("dist/bundle.js")).unwrap();
    assert_eq!(paths.dir_to, Path::new("dist/"));
    assert_eq!(paths.filename_to, "bundle.js");
    assert_eq!(paths.entry(), Path::new("src/app.js"));
  }

  #[test]
  fn source_without_file_name_is_rejected() {
    let err = ResolvedPaths::new(Path::new("/"), Path::new("dist/")).unwrap_err();
    assert_eq!(err, OptionsError::MissingFileName(PathBuf::from("/")));
  }
}
