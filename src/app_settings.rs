// src/app_settings.rs
use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::warn;

/// Overrides how many rows the recent projects list shows.
pub const DISPLAY_LIMIT_KEY: &str = "recent_projects.display_limit";
pub const DEFAULT_DISPLAY_LIMIT: usize = 5;

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM app_settings WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO app_settings (key, value) VALUES (?1, ?2)",
        params![key, value],
    )?;
    Ok(())
}

/// Configured display limit, or `DEFAULT_DISPLAY_LIMIT` when unset or not a positive integer.
pub fn display_limit(conn: &Connection) -> Result<usize> {
    let limit = match get_setting(conn, DISPLAY_LIMIT_KEY)? {
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                warn!(value = %raw, "Ignoring invalid {}", DISPLAY_LIMIT_KEY);
                DEFAULT_DISPLAY_LIMIT
            }
        },
        None => DEFAULT_DISPLAY_LIMIT,
    };
    Ok(limit)
}
