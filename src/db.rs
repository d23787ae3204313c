// src/db.rs
use crate::error::Result;
use crate::recent_projects::init_recent_projects_table;
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::info;

/// Environment variable that overrides where the database file lives.
pub const DB_PATH_ENV: &str = "RECENT_PROJECTS_DB";
const DB_FILE_NAME: &str = "recent_projects.db";

#[derive(Clone)]
pub struct AppState {
    pub conn: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self { conn: Arc::new(Mutex::new(conn)) }
    }

    /// Fresh in-memory database with all tables created.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_db_tables(&conn)?;
        Ok(Self::new(conn))
    }
}

// Resolves the database file: $RECENT_PROJECTS_DB if set, otherwise next to the executable
pub fn get_db_path() -> Result<PathBuf> {
    if let Some(custom) = env::var_os(DB_PATH_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(custom));
    }

    let exe_path = env::current_exe()?;
    let exe_dir = exe_path.parent().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Failed to get parent directory of executable: {}", exe_path.display()),
        )
    })?;
    Ok(exe_dir.join(DB_FILE_NAME))
}

/// Opens (creating if needed) the database at `db_path`, including its parent directory.
pub fn open_connection(db_path: &Path) -> Result<Connection> {
    if let Some(dir) = db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    info!(path = %db_path.display(), "Opening database");
    Ok(Connection::open(db_path)?)
}

pub fn init_connection() -> Result<Connection> {
    let db_path = get_db_path()?;
    open_connection(&db_path)
}

// Creates the necessary tables if they don't exist
pub fn init_db_tables(conn: &Connection) -> Result<()> {
    init_recent_projects_table(conn)?;
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS app_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );
        "#,
    )?;
    info!("Database tables initialized");
    Ok(())
}
