// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use recent_projects_lib::commands::{self, SharedRecentList, PROJECT_SELECTED_EVENT};
use recent_projects_lib::db::{init_connection, init_db_tables, AppState};
use recent_projects_lib::logging::init_logging;
use recent_projects_lib::recent_list::{RecentProjectsList, SqliteApi};
use std::sync::Arc;
use tauri::{Emitter, Manager}; // Needed for app.manage() and app_handle.emit()
use tracing::{error, warn};

fn main() {
    init_logging();
    let context = tauri::generate_context!();

    tauri::Builder::default()
        .setup(|app| {
            let app_handle = app.handle().clone();

            let conn = match init_connection() {
                Ok(c) => c,
                Err(e) => {
                    error!("FATAL: DB connection failed during setup: {}", e);
                    panic!("DB connection failed: {}", e);
                }
            };

            if let Err(e) = init_db_tables(&conn) {
                error!("FATAL: DB table init failed during setup: {}", e);
                panic!("DB table init failed: {}", e);
            }

            let app_db_state = AppState::new(conn);
            app.manage(app_db_state.clone());

            let api = SqliteApi::new(app_db_state);
            let display_limit = api.configured_display_limit().unwrap_or_else(|e| {
                warn!("Falling back to default display limit: {}", e);
                recent_projects_lib::app_settings::DEFAULT_DISPLAY_LIMIT
            });

            // Row selection is handed to the webview, which opens the project
            let list: SharedRecentList = Arc::new(
                RecentProjectsList::new(api, move |path: &str| {
                    if let Err(e) = app_handle.emit(PROJECT_SELECTED_EVENT, path.to_string()) {
                        error!("Failed to emit {}: {}", PROJECT_SELECTED_EVENT, e);
                    }
                })
                .with_display_limit(display_limit),
            );
            app.manage(list);

            Ok(())
        })
        .plugin(tauri_plugin_dialog::init())
        .invoke_handler(tauri::generate_handler![
            commands::add_recent_project,
            commands::get_recent_projects,
            commands::remove_recent_project,
            commands::clear_recent_projects,
            commands::get_app_setting_cmd,
            commands::set_app_setting_cmd,
            commands::get_syntax_theme,
            commands::get_syntax_theme_css,
            commands::recent_list_load,
            commands::recent_list_view,
            commands::recent_list_remove,
            commands::recent_list_select
        ])
        .run(context)
        .expect("error while running tauri application");
}
