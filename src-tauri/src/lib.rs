//! Sticky Todo Backend
//!
//! Host process for the sticky-note window:
//! - domain: Window geometry values and errors
//! - repository: Position persistence
//! - window_manager: Owned native window lifecycle
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::Mutex;

use tauri::{AppHandle, Manager, RunEvent, WebviewWindow, WindowEvent};

mod commands;
mod config;
mod domain;
mod repository;
mod window_manager;

use config::{HostConfig, CONFIG_FILE_NAME};
use repository::PositionRepository;
use window_manager::WindowManager;

const MAIN_WINDOW: &str = "main";

/// Application state shared across commands
pub struct AppState {
    pub window_manager: Mutex<WindowManager<WebviewWindow>>,
    /// None when the home directory cannot be resolved
    pub positions: Option<PositionRepository>,
}

fn load_config(app_handle: &AppHandle) -> HostConfig {
    match app_handle.path().app_config_dir() {
        Ok(dir) => HostConfig::load(&dir.join(CONFIG_FILE_NAME)),
        Err(e) => {
            log::warn!("No app config dir, using default config: {}", e);
            HostConfig::default()
        }
    }
}

fn position_file_path(app_handle: &AppHandle, config: &HostConfig) -> Option<PathBuf> {
    match app_handle.path().home_dir() {
        Ok(home) => Some(home.join(&config.position_file_name)),
        Err(e) => {
            log::warn!("No home dir, window position will not be persisted: {}", e);
            None
        }
    }
}

/// Release the main window and write its final position.
///
/// Best effort: failures are logged and never block shutdown.
fn persist_window_position(app_handle: &AppHandle) {
    let Some(state) = app_handle.try_state::<AppState>() else {
        return;
    };

    let detached = match state.window_manager.lock() {
        Ok(mut manager) => manager.detach(),
        Err(_) => {
            log::warn!("Window manager lock poisoned, skipping position save");
            return;
        }
    };

    match detached {
        Ok(Some(position)) => {
            let Some(repo) = &state.positions else {
                return;
            };
            match repo.save(&position) {
                Ok(()) => log::info!("Saved window position ({}, {}) to {}", position.x, position.y, repo.path().display()),
                Err(e) => log::warn!("Failed to save window position: {}", e),
            }
        }
        Ok(None) => {}
        Err(e) => log::warn!("Failed to read window position on exit: {}", e),
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let app = tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window(MAIN_WINDOW) {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            let logger = app_handle
                .path()
                .app_log_dir()
                .map_err(|e| e.to_string())
                .and_then(|dir| rolling_logger::init_logger(dir, "StickyTodo"));
            if let Err(e) = logger {
                eprintln!("[{}] Logger init failed: {}", chrono::Local::now().format("%H:%M:%S%.3f"), e);
            }

            let config = load_config(&app_handle);
            let positions = position_file_path(&app_handle, &config).map(PositionRepository::new);
            let saved = positions.as_ref().and_then(|repo| repo.load());

            let mut window_manager = WindowManager::new(config);
            match app.get_webview_window(MAIN_WINDOW) {
                Some(window) => window_manager.attach(window, saved)?,
                None => log::error!("Main window missing at startup"),
            }

            app.manage(AppState {
                window_manager: Mutex::new(window_manager),
                positions,
            });

            log::info!("Setup complete");
            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::CloseRequested { .. } = event {
                if window.label() == MAIN_WINDOW {
                    persist_window_position(window.app_handle());
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::move_window,
            commands::set_window_width,
            commands::set_window_height,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        if let RunEvent::ExitRequested { .. } = event {
            persist_window_position(app_handle);
        }
    });
}
