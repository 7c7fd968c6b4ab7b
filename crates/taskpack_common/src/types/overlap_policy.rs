use serde::Deserialize;

/// What a job handle does when asked to run while a previous run is still in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
  /// Wait for the running build, then build again.
  #[default]
  Queue,
  /// Fail the new run immediately.
  Reject,
}
