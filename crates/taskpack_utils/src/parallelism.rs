/// Worker count for parallel minification: every core but one, never less than one.
pub fn minify_workers() -> usize {
  workers_for(num_cpus::get())
}

fn workers_for(cpus: usize) -> usize {
  cpus.saturating_sub(1).max(1)
}

#[test]
fn test_workers_for() {
  assert_eq!(workers_for(0), 1);
  assert_eq!(workers_for(1), 1);
  assert_eq!(workers_for(2), 1);
  assert_eq!(workers_for(8), 7);
  assert!(minify_workers() >= 1);
}
