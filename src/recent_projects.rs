// src/recent_projects.rs
//! Persistence of recently opened projects in the `recent_projects` table.
//!
//! Rows are keyed by path. Opening a project again bumps its timestamp and
//! access count instead of inserting a duplicate.

use crate::error::{Error, Result};
use crate::types::RecentProject;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result as SqlResult};
use tracing::{debug, warn};

/// Row count returned by `get_recent_projects` when the caller gives no limit.
pub const DEFAULT_QUERY_LIMIT: usize = 10;

pub fn init_recent_projects_table(conn: &Connection) -> Result<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS recent_projects (
            path TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            last_accessed TEXT NOT NULL,
            access_count INTEGER NOT NULL DEFAULT 1
        )
        "#,
        [],
    )?;
    Ok(())
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn map_row_to_recent_project(row: &rusqlite::Row<'_>) -> SqlResult<RecentProject> {
    Ok(RecentProject {
        path: row.get(0)?,
        name: row.get(1)?,
        last_accessed: row.get(2)?,
        access_count: row.get(3)?,
    })
}

/// Records an access to `path` at the current time.
pub fn add_recent_project(conn: &Connection, path: &str) -> Result<RecentProject> {
    add_recent_project_at(conn, path, Utc::now())
}

/// Records an access to `path` at `at`: updates an existing row or inserts a new one.
pub fn add_recent_project_at(
    conn: &Connection,
    path: &str,
    at: DateTime<Utc>,
) -> Result<RecentProject> {
    if path.trim().is_empty() {
        return Err(Error::InvalidPath(path.to_string()));
    }
    let timestamp = format_timestamp(at);

    let updated = conn.execute(
        r#"
        UPDATE recent_projects
        SET last_accessed = ?1,
            access_count = access_count + 1
        WHERE path = ?2
        "#,
        params![timestamp, path],
    )?;

    if updated == 0 {
        let name = RecentProject::name_from_path(path);
        conn.execute(
            "INSERT INTO recent_projects (path, name, last_accessed) VALUES (?1, ?2, ?3)",
            params![path, name, timestamp],
        )?;
        debug!(%path, %name, "Added recent project");
    } else {
        debug!(%path, "Touched recent project");
    }

    let project = conn.query_row(
        r#"
        SELECT path, name, last_accessed, access_count
        FROM recent_projects
        WHERE path = ?1
        "#,
        params![path],
        map_row_to_recent_project,
    )?;
    Ok(project)
}

pub fn get_recent_project(conn: &Connection, path: &str) -> Result<Option<RecentProject>> {
    let project = conn
        .query_row(
            r#"
            SELECT path, name, last_accessed, access_count
            FROM recent_projects
            WHERE path = ?1
            "#,
            params![path],
            map_row_to_recent_project,
        )
        .optional()?;
    Ok(project)
}

/// Most recently accessed first; ties go to the more frequently used project.
/// Ordered by parsed time so rows written as `YYYY-MM-DD HH:MM:SS` interleave
/// correctly with RFC 3339 rows.
pub fn get_recent_projects(conn: &Connection, limit: Option<usize>) -> Result<Vec<RecentProject>> {
    let limit = i64::try_from(limit.unwrap_or(DEFAULT_QUERY_LIMIT)).unwrap_or(i64::MAX);

    let mut stmt = conn.prepare(
        r#"
        SELECT path, name, last_accessed, access_count
        FROM recent_projects
        ORDER BY julianday(last_accessed) DESC, access_count DESC
        LIMIT ?1
        "#,
    )?;

    let projects = stmt
        .query_map(params![limit], map_row_to_recent_project)?
        .collect::<SqlResult<Vec<_>>>()?;
    Ok(projects)
}

/// Returns whether a row was deleted. Unknown paths are not an error.
pub fn remove_recent_project(conn: &Connection, path: &str) -> Result<bool> {
    let rows_affected = conn.execute("DELETE FROM recent_projects WHERE path = ?1", params![path])?;

    if rows_affected == 0 {
        warn!(%path, "Attempted to remove recent project, but it was not found");
        Ok(false)
    } else {
        debug!(%path, "Removed recent project");
        Ok(true)
    }
}

pub fn clear_recent_projects(conn: &Connection) -> Result<usize> {
    let removed = conn.execute("DELETE FROM recent_projects", [])?;
    debug!(removed, "Cleared recent projects");
    Ok(removed)
}
