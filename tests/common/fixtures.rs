use recent_projects_lib::db::{init_db_tables, open_connection, AppState};
use recent_projects_lib::{Error, RecentProject, RecentProjectsApi, Result};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn project(path: &str, access_count: i64) -> RecentProject {
    RecentProject {
        path: path.to_string(),
        name: RecentProject::name_from_path(path),
        last_accessed: "2024-03-01T12:00:00.000000Z".to_string(),
        access_count,
    }
}

pub fn projects(paths: &[&str]) -> Vec<RecentProject> {
    paths.iter().map(|p| project(p, 1)).collect()
}

/// On-disk database in a temp dir. Keep the `TempDir` alive for the test.
pub fn create_test_state() -> (AppState, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let conn = open_connection(&dir.path().join("recent.db")).expect("Failed to open test DB");
    init_db_tables(&conn).expect("Failed to init tables");
    (AppState::new(conn), dir)
}

/// Records selections passed to the list's callback.
#[derive(Clone, Default)]
pub struct Selections(Arc<Mutex<Vec<String>>>);

impl Selections {
    pub fn callback(&self) -> impl Fn(&str) + Send + Sync + 'static {
        let inner = self.0.clone();
        move |path: &str| inner.lock().unwrap().push(path.to_string())
    }

    pub fn taken(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct Inner {
    projects: Mutex<Vec<RecentProject>>,
    fail_loads: AtomicBool,
    failing_paths: Mutex<HashSet<String>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    load_gate: Mutex<Option<Arc<Notify>>>,
    remove_calls: Mutex<Vec<String>>,
    load_calls: AtomicUsize,
    last_limit: AtomicUsize,
}

/// Scriptable backend: canned projects, injectable failures, and per-path
/// gates that hold a removal until the test releases it.
#[derive(Clone, Default)]
pub struct MockApi {
    inner: Arc<Inner>,
}

impl MockApi {
    pub fn with_projects(projects: Vec<RecentProject>) -> Self {
        let api = Self::default();
        *api.inner.projects.lock().unwrap() = projects;
        api
    }

    pub fn fail_loads(&self, fail: bool) {
        self.inner.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_removal(&self, path: &str) {
        self.inner.failing_paths.lock().unwrap().insert(path.to_string());
    }

    /// Removals of `path` block until `release(path)`.
    pub fn gate(&self, path: &str) {
        self.inner
            .gates
            .lock()
            .unwrap()
            .insert(path.to_string(), Arc::new(Notify::new()));
    }

    /// Loads block until `release_load()`.
    pub fn gate_loads(&self) {
        *self.inner.load_gate.lock().unwrap() = Some(Arc::new(Notify::new()));
    }

    pub fn release_load(&self) {
        if let Some(gate) = self.inner.load_gate.lock().unwrap().as_ref() {
            gate.notify_one();
        }
    }

    pub fn set_projects(&self, projects: Vec<RecentProject>) {
        *self.inner.projects.lock().unwrap() = projects;
    }

    pub fn release(&self, path: &str) {
        if let Some(gate) = self.inner.gates.lock().unwrap().get(path) {
            gate.notify_one();
        }
    }

    pub fn load_calls(&self) -> usize {
        self.inner.load_calls.load(Ordering::SeqCst)
    }

    pub fn last_limit(&self) -> usize {
        self.inner.last_limit.load(Ordering::SeqCst)
    }

    pub fn remove_calls(&self) -> Vec<String> {
        self.inner.remove_calls.lock().unwrap().clone()
    }
}

impl RecentProjectsApi for MockApi {
    async fn get_recent_projects(&self, limit: usize) -> Result<Vec<RecentProject>> {
        self.inner.load_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.last_limit.store(limit, Ordering::SeqCst);

        let gate = self.inner.load_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.inner.fail_loads.load(Ordering::SeqCst) {
            return Err(Error::Backend("backend offline".to_string()));
        }
        Ok(self.inner.projects.lock().unwrap().iter().take(limit).cloned().collect())
    }

    async fn remove_recent_project(&self, path: &str) -> Result<()> {
        self.inner.remove_calls.lock().unwrap().push(path.to_string());

        let gate = self.inner.gates.lock().unwrap().get(path).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.inner.failing_paths.lock().unwrap().contains(path) {
            return Err(Error::Backend(format!("cannot remove {}", path)));
        }
        self.inner.projects.lock().unwrap().retain(|p| p.path != path);
        Ok(())
    }
}
