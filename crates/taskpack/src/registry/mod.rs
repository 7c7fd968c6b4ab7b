pub mod job_handle;

use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use taskpack_common::JobId;
use tracing::debug;

use self::job_handle::JobHandle;

/// Job identity → job handle. Entries are only ever added: an identity is configured at most
/// once for the lifetime of the registry and its handle is never replaced.
#[derive(Debug)]
pub struct JobRegistry {
  jobs: DashMap<JobId, Arc<JobHandle>, FxBuildHasher>,
  configured: AtomicUsize,
}

impl JobRegistry {
  pub fn new() -> Self {
    Self { jobs: DashMap::with_hasher(FxBuildHasher), configured: AtomicUsize::new(0) }
  }

  pub fn get(&self, id: &str) -> Option<Arc<JobHandle>> {
    self.jobs.get(id).map(|entry| Arc::clone(entry.value()))
  }

  pub fn contains(&self, id: &str) -> bool {
    self.jobs.contains_key(id)
  }

  pub fn len(&self) -> usize {
    self.jobs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.jobs.is_empty()
  }

  /// How many times `configure` closures actually ran.
  pub fn configured_count(&self) -> usize {
    self.configured.load(Ordering::Relaxed)
  }

  pub fn ids(&self) -> Vec<JobId> {
    let mut ids: Vec<_> = self.jobs.iter().map(|entry| entry.key().clone()).collect();
    ids.sort_unstable();
    ids
  }

  /// Returns the handle registered under `id`, running `configure` to create it if there is
  /// none yet. Concurrent callers for the same missing identity wait on the entry lock, so
  /// `configure` runs once; if it fails nothing is stored and the error is returned.
  pub fn get_or_configure<F>(&self, id: &JobId, configure: F) -> anyhow::Result<Arc<JobHandle>>
  where
    F: FnOnce() -> anyhow::Result<JobHandle>,
  {
    if let Some(handle) = self.get(id.as_str()) {
      debug!(job = %id, "Reusing configured job");
      return Ok(handle);
    }

    let entry = self.jobs.entry(id.clone()).or_try_insert_with(|| {
      let handle = configure()?;
      self.configured.fetch_add(1, Ordering::Relaxed);
      debug!(job = %id, "Configured job");
      Ok::<_, anyhow::Error>(Arc::new(handle))
    })?;

    Ok(Arc::clone(entry.value()))
  }
}

impl Default for JobRegistry {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use std::thread;

  use async_trait::async_trait;
  use taskpack_common::{JobStats, TaskOptions};
  use taskpack_error::BuildResult;
  use taskpack_resolver::ProjectRoot;

  use super::*;
  use crate::{compose, normalize_task, CompiledJob};

  struct NoopJob;

  #[async_trait]
  impl CompiledJob for NoopJob {
    async fn run(&self) -> BuildResult<JobStats> {
      Ok(JobStats::default())
    }
  }

  fn handle(from: &str) -> JobHandle {
    let task =
      normalize_task(TaskOptions::new(from, "dist/"), &ProjectRoot::new("/srv/app")).unwrap();
    JobHandle::new(task.id.clone(), compose(&task, false), Box::new(NoopJob))
  }

  #[test]
  fn configures_each_identity_once() {
    let registry = JobRegistry::new();
    let id = JobId::named("app");

    let first = registry.get_or_configure(&id, || Ok(handle("src/app.js"))).unwrap();
    let second = registry.get_or_configure(&id, || Ok(handle("src/other.js"))).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.configured_count(), 1);
    assert_eq!(second.config().output.filename, "app.js");
  }

  #[test]
  fn failed_configuration_is_not_stored() {
    let registry = JobRegistry::new();
    let id = JobId::named("app");

    let err = registry.get_or_configure(&id, || anyhow::bail!("engine refused configuration"));
    assert!(err.is_err());
    assert!(!registry.contains("app"));

    registry.get_or_configure(&id, || Ok(handle("src/app.js"))).unwrap();
    assert!(registry.contains("app"));
    assert_eq!(registry.configured_count(), 1);
  }

  #[test]
  fn concurrent_callers_configure_once() {
    let registry = JobRegistry::new();
    let id = JobId::named("app");
    let (registry, id) = (&registry, &id);

    let handles: Vec<_> = thread::scope(|scope| {
      let workers: Vec<_> = (0..8)
        .map(|_| {
          scope.spawn(move || registry.get_or_configure(id, || Ok(handle("src/app.js"))).unwrap())
        })
        .collect();
      workers.into_iter().map(|worker| worker.join().unwrap()).collect()
    });

    assert_eq!(registry.configured_count(), 1);
    assert!(handles.iter().all(|handle| Arc::ptr_eq(handle, &handles[0])));
  }

  #[test]
  fn lists_identities_in_order() {
    let registry = JobRegistry::default();
    for name in ["vendor", "app", "admin"] {
      registry.get_or_configure(&JobId::named(name), || Ok(handle("src/app.js"))).unwrap();
    }
    let ids: Vec<_> = registry.ids().iter().map(ToString::to_string).collect();
    assert_eq!(ids, ["admin", "app", "vendor"]);
    assert_eq!(registry.len(), 3);
  }
}
