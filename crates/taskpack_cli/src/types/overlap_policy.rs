use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum OverlapPolicy {
  Queue,
  Reject,
}

impl From<OverlapPolicy> for taskpack::OverlapPolicy {
  fn from(value: OverlapPolicy) -> Self {
    match value {
      OverlapPolicy::Queue => taskpack::OverlapPolicy::Queue,
      OverlapPolicy::Reject => taskpack::OverlapPolicy::Reject,
    }
  }
}
