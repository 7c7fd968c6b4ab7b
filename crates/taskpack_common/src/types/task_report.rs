/// The uniform report a task emits once a run has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
  pub task_name: String,
  pub src: String,
  pub dest: String,
  pub outcome: TaskOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
  /// `characteristics` lists what the build applied, e.g. `Source map: inline` or `Compress`.
  Success { characteristics: Vec<String> },
  Failure,
}

impl TaskReport {
  pub fn is_success(&self) -> bool {
    matches!(self.outcome, TaskOutcome::Success { .. })
  }

  pub fn characteristics(&self) -> &[String] {
    match &self.outcome {
      TaskOutcome::Success { characteristics } => characteristics,
      TaskOutcome::Failure => &[],
    }
  }
}
