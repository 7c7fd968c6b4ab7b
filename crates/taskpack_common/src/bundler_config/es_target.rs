use serde::{Serialize, Serializer};

/// ECMAScript language level handed to the minimizer. Serialized the way minifiers expect it:
/// `5` for ES5 and the edition year afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ESTarget {
  Es5,
  Es2017,
}

impl ESTarget {
  pub fn edition(self) -> u16 {
    match self {
      Self::Es5 => 5,
      Self::Es2017 => 2017,
    }
  }
}

impl Serialize for ESTarget {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(self.edition())
  }
}

#[test]
fn test_es_target_serialization() {
  assert_eq!(serde_json::to_string(&ESTarget::Es5).unwrap(), "5");
  assert_eq!(serde_json::to_string(&ESTarget::Es2017).unwrap(), "2017");
}
