use std::{
  fmt::Display,
  ops::{Deref, DerefMut},
};

/// Every diagnostic a single bundling run produced. A run is either a full success or a
/// `BuildError`; there is no partial state in between.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self.0.as_slice() {
      [] => write!(f, "build failed without diagnostics"),
      [single] => write!(f, "{single}"),
      errors => {
        write!(f, "build failed with {} errors", errors.len())?;
        for error in errors {
          write!(f, "\n  - {error}")?;
        }
        Ok(())
      }
    }
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_display_build_error() {
  let single = BuildError::from(anyhow::anyhow!("Module not found: ./missing.js"));
  assert_eq!(single.to_string(), "Module not found: ./missing.js");

  let many = BuildError::from(vec![anyhow::anyhow!("first"), anyhow::anyhow!("second")]);
  assert_eq!(many.to_string(), "build failed with 2 errors\n  - first\n  - second");
  assert_eq!(many.len(), 2);
}
