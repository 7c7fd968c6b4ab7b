use std::{borrow::Cow, path::Path};

use sugar_path::SugarPath;

pub trait PathExt {
  /// `true` when the last component carries a non-empty extension, i.e. the path names a file
  /// rather than a directory.
  fn has_extension(&self) -> bool;

  /// Splits the path into its parent directory and file name.
  fn split_file_name(&self) -> Option<(&Path, Cow<str>)>;

  fn to_slash_string(&self) -> String;
}

impl PathExt for Path {
  fn has_extension(&self) -> bool {
    self.extension().is_some_and(|ext| !ext.is_empty())
  }

  fn split_file_name(&self) -> Option<(&Path, Cow<str>)> {
    let file_name = self.file_name()?;
    let parent = self.parent().unwrap_or_else(|| Path::new(""));
    Some((parent, file_name.to_string_lossy()))
  }

  fn to_slash_string(&self) -> String {
    self.to_slash().map_or_else(|| self.to_string_lossy().into_owned(), Cow::into_owned)
  }
}

#[test]
fn test_has_extension() {
  assert!(Path::new("dist/bundle.js").has_extension());
  assert!(Path::new("/srv/app/dist/app.min.css").has_extension());
  assert!(!Path::new("dist/").has_extension());
  assert!(!Path::new("dist").has_extension());
  // Dotfiles have no extension.
  assert!(!Path::new("dist/.cache").has_extension());
}

#[test]
fn test_split_file_name() {
  let (dir, name) = Path::new("/srv/app/src/app.js").split_file_name().unwrap();
  assert_eq!(dir, Path::new("/srv/app/src"));
  assert_eq!(name, "app.js");

  let (dir, name) = Path::new("app.js").split_file_name().unwrap();
  assert_eq!(dir, Path::new(""));
  assert_eq!(name, "app.js");

  assert!(Path::new("/").split_file_name().is_none());
}
