use std::{borrow::Borrow, fmt::Display, path::Path};

use arcstr::ArcStr;
use taskpack_utils::path_ext::PathExt;

/// Identity of one logical build job across repeated invocations: the task's explicit `name`,
/// or its resolved source path when no name is given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(ArcStr);

impl JobId {
  pub fn named(name: &str) -> Self {
    Self(name.into())
  }

  pub fn from_path(path: &Path) -> Self {
    Self(path.to_slash_string().into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Borrow<str> for JobId {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl Display for JobId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}
