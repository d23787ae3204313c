// src/lib.rs
pub mod app_settings;
pub mod db;
pub mod error;
pub mod logging;
pub mod recent_list;
pub mod recent_projects;
pub mod relative_time;
pub mod theme;
pub mod types;

#[cfg(feature = "desktop")]
pub mod commands;

pub use error::{Error, Result};
pub use recent_list::{ListView, RecentProjectsApi, RecentProjectsList, RowView, SqliteApi};
pub use theme::LIGHT_SYNTAX_THEME;
pub use types::RecentProject;
