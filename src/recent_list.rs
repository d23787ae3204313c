// src/recent_list.rs
//! Presentation state for the recent projects list.
//!
//! The list owns a snapshot of at most `display_limit` projects, a loading
//! flag and the set of paths with a removal in flight. A renderer asks for a
//! [`ListView`] and forwards row clicks to [`RecentProjectsList::select`] and
//! remove-button clicks to [`RecentProjectsList::remove`]. Backend failures
//! are logged and swallowed; they never reach the renderer.

use crate::app_settings::{self, DEFAULT_DISPLAY_LIMIT};
use crate::db::AppState;
use crate::error::{Error, Result};
use crate::recent_projects;
use crate::relative_time::label_for_timestamp;
use crate::types::RecentProject;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashSet;
use std::future::Future;
use tracing::{debug, error};

pub const HEADING: &str = "Recent Projects";

/// Backend calls the list depends on.
pub trait RecentProjectsApi: Send + Sync {
    fn get_recent_projects(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<RecentProject>>> + Send;

    fn remove_recent_project(&self, path: &str) -> impl Future<Output = Result<()>> + Send;
}

/// `RecentProjectsApi` over the app's SQLite connection. Queries run on the
/// blocking pool so the caller's executor is never stalled on the DB mutex.
#[derive(Clone)]
pub struct SqliteApi {
    state: AppState,
}

impl SqliteApi {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Display limit from `app_settings`, read synchronously at setup time.
    pub fn configured_display_limit(&self) -> Result<usize> {
        let conn = self.state.conn.lock()?;
        app_settings::display_limit(&conn)
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&rusqlite::Connection) -> Result<T> + Send + 'static,
    {
        let conn = self.state.conn.clone();
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock()?;
            f(&guard)
        })
        .await
        .map_err(|e| Error::Task(e.to_string()))?
    }
}

impl RecentProjectsApi for SqliteApi {
    async fn get_recent_projects(&self, limit: usize) -> Result<Vec<RecentProject>> {
        self.with_conn(move |conn| recent_projects::get_recent_projects(conn, Some(limit)))
            .await
    }

    async fn remove_recent_project(&self, path: &str) -> Result<()> {
        let path = path.to_string();
        self.with_conn(move |conn| recent_projects::remove_recent_project(conn, &path).map(|_| ()))
            .await
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RowView {
    pub path: String,
    pub name: String,
    /// e.g. "5 minutes ago"
    pub last_accessed: String,
    /// "Used N times", only for projects opened more than once
    pub usage: Option<String>,
    /// Row and remove button are disabled and the button shows a spinner
    pub removing: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListView {
    Loading {
        class_name: Option<String>,
    },
    /// Nothing to show: no container, no heading.
    Hidden,
    Rows {
        class_name: Option<String>,
        heading: &'static str,
        rows: Vec<RowView>,
    },
}

#[derive(Debug)]
struct ListState {
    projects: Vec<RecentProject>,
    loading: bool,
    removing: HashSet<String>,
}

type SelectCallback = Box<dyn Fn(&str) + Send + Sync>;

pub struct RecentProjectsList<A> {
    api: A,
    on_select: SelectCallback,
    class_name: Option<String>,
    display_limit: usize,
    state: Mutex<ListState>,
}

// Clears the removing mark even if the remove future is dropped mid-request
struct RemovingGuard<'a> {
    state: &'a Mutex<ListState>,
    path: &'a str,
}

impl Drop for RemovingGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().removing.remove(self.path);
    }
}

impl<A: RecentProjectsApi> RecentProjectsList<A> {
    pub fn new(api: A, on_select: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            api,
            on_select: Box::new(on_select),
            class_name: None,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            state: Mutex::new(ListState {
                projects: Vec::new(),
                loading: true,
                removing: HashSet::new(),
            }),
        }
    }

    /// Extra classes for the outer container.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit.max(1);
        self
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    /// Fetches the snapshot. On failure the previous snapshot stays.
    pub async fn load(&self) {
        self.state.lock().loading = true;

        let result = self.api.get_recent_projects(self.display_limit).await;

        let mut state = self.state.lock();
        match result {
            Ok(mut projects) => {
                projects.truncate(self.display_limit);
                debug!(count = projects.len(), "Loaded recent projects");
                state.projects = projects;
            }
            Err(e) => error!(error = %e, "Failed to load recent projects"),
        }
        state.loading = false;
    }

    /// Removes `path` through the backend, dropping the row only on success.
    /// Returns whether the row was removed. A path already being removed is ignored.
    pub async fn remove(&self, path: &str) -> bool {
        if !self.state.lock().removing.insert(path.to_string()) {
            debug!(%path, "Removal already in flight");
            return false;
        }
        let guard = RemovingGuard { state: &self.state, path };

        let result = self.api.remove_recent_project(path).await;

        let removed = match result {
            Ok(()) => {
                self.state.lock().projects.retain(|p| p.path != path);
                true
            }
            Err(e) => {
                error!(%path, error = %e, "Failed to remove recent project");
                false
            }
        };
        drop(guard);
        removed
    }

    /// Hands `path` to the select callback if it is a displayed, enabled row.
    pub fn select(&self, path: &str) -> bool {
        let selectable = {
            let state = self.state.lock();
            !state.removing.contains(path) && state.projects.iter().any(|p| p.path == path)
        };
        if selectable {
            (self.on_select)(path);
        }
        selectable
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    pub fn is_removing(&self, path: &str) -> bool {
        self.state.lock().removing.contains(path)
    }

    pub fn projects(&self) -> Vec<RecentProject> {
        self.state.lock().projects.clone()
    }

    pub fn view(&self, now: DateTime<Utc>) -> ListView {
        let state = self.state.lock();
        if state.loading {
            return ListView::Loading { class_name: self.class_name.clone() };
        }
        if state.projects.is_empty() {
            return ListView::Hidden;
        }

        let rows = state
            .projects
            .iter()
            .map(|p| RowView {
                path: p.path.clone(),
                name: p.name.clone(),
                last_accessed: label_for_timestamp(&p.last_accessed, now),
                usage: (p.access_count > 1).then(|| format!("Used {} times", p.access_count)),
                removing: state.removing.contains(&p.path),
            })
            .collect();

        ListView::Rows { class_name: self.class_name.clone(), heading: HEADING, rows }
    }
}
