// src/commands.rs
//! Tauri command surface. Errors cross the IPC boundary as strings.

use crate::app_settings;
use crate::db::AppState;
use crate::recent_list::{ListView, RecentProjectsList, SqliteApi};
use crate::recent_projects;
use crate::theme::LIGHT_SYNTAX_THEME;
use crate::types::RecentProject;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tauri::{command, State};

/// Event emitted to the webview when a list row is selected; payload is the path.
pub const PROJECT_SELECTED_EVENT: &str = "recent-project-selected";

pub type SharedRecentList = Arc<RecentProjectsList<SqliteApi>>;

// --- Store ---

#[command]
pub fn add_recent_project(state: State<AppState>, path: String) -> Result<RecentProject, String> {
    let conn = state.conn.lock().map_err(|e| format!("DB lock failed: {}", e))?;
    recent_projects::add_recent_project(&conn, &path).map_err(|e| e.to_string())
}

#[command]
pub fn get_recent_projects(
    state: State<AppState>,
    limit: Option<usize>,
) -> Result<Vec<RecentProject>, String> {
    let conn = state.conn.lock().map_err(|e| format!("DB lock failed: {}", e))?;
    recent_projects::get_recent_projects(&conn, limit).map_err(|e| e.to_string())
}

#[command]
pub fn remove_recent_project(state: State<AppState>, path: String) -> Result<(), String> {
    let conn = state.conn.lock().map_err(|e| format!("DB lock failed for remove: {}", e))?;
    recent_projects::remove_recent_project(&conn, &path)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[command]
pub fn clear_recent_projects(state: State<AppState>) -> Result<(), String> {
    let conn = state.conn.lock().map_err(|e| format!("DB lock failed for clear: {}", e))?;
    recent_projects::clear_recent_projects(&conn)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

// --- Settings ---

#[command]
pub fn get_app_setting_cmd(state: State<AppState>, key: String) -> Result<Option<String>, String> {
    let conn = state
        .conn
        .lock()
        .map_err(|e| format!("DB lock failed for get_app_setting: {}", e))?;
    app_settings::get_setting(&conn, &key)
        .map_err(|e| format!("Failed to query app_settings for key '{}': {}", key, e))
}

#[command]
pub fn set_app_setting_cmd(state: State<AppState>, key: String, value: String) -> Result<(), String> {
    let conn = state
        .conn
        .lock()
        .map_err(|e| format!("DB lock failed for set_app_setting: {}", e))?;
    app_settings::set_setting(&conn, &key, &value)
        .map_err(|e| format!("Failed to set app_setting for key '{}': {}", key, e))
}

// --- Theme ---

#[command]
pub fn get_syntax_theme() -> Value {
    LIGHT_SYNTAX_THEME.to_json()
}

#[command]
pub fn get_syntax_theme_css() -> String {
    LIGHT_SYNTAX_THEME.to_css()
}

// --- List state ---

#[command]
pub async fn recent_list_load(list: State<'_, SharedRecentList>) -> Result<ListView, String> {
    list.load().await;
    Ok(list.view(Utc::now()))
}

#[command]
pub fn recent_list_view(list: State<'_, SharedRecentList>) -> ListView {
    list.view(Utc::now())
}

#[command]
pub async fn recent_list_remove(
    list: State<'_, SharedRecentList>,
    path: String,
) -> Result<ListView, String> {
    list.remove(&path).await;
    Ok(list.view(Utc::now()))
}

#[command]
pub fn recent_list_select(list: State<'_, SharedRecentList>, path: String) -> bool {
    list.select(&path)
}
