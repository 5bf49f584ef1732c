//! Window Geometry Commands
//!
//! Fire-and-forget bridge calls from the UI: move by a drag delta and
//! per-axis resize requests. Invalid or sub-threshold requests are dropped
//! by the window manager and still return `Ok`.

use std::sync::MutexGuard;

use tauri::{WebviewWindow, State};

use crate::window_manager::WindowManager;
use crate::AppState;

fn lock_manager<'a>(state: &'a State<'_, AppState>) -> Result<MutexGuard<'a, WindowManager<WebviewWindow>>, String> {
    state
        .window_manager
        .lock()
        .map_err(|_| "Window manager lock poisoned".to_string())
}

/// Move the window by a drag delta (screen pixels)
#[tauri::command]
pub fn move_window(state: State<'_, AppState>, delta_x: i32, delta_y: i32) -> Result<(), String> {
    if delta_x == 0 && delta_y == 0 {
        return Ok(());
    }
    let mut manager = lock_manager(&state)?;
    manager.move_by(delta_x, delta_y).map_err(|e| e.to_string())?;
    Ok(())
}

/// Request a new window width
#[tauri::command]
pub fn set_window_width(state: State<'_, AppState>, width: f64) -> Result<(), String> {
    let manager = lock_manager(&state)?;
    manager.set_width(width).map_err(|e| e.to_string())?;
    Ok(())
}

/// Request a new window height
#[tauri::command]
pub fn set_window_height(state: State<'_, AppState>, height: f64) -> Result<(), String> {
    let manager = lock_manager(&state)?;
    manager.set_height(height).map_err(|e| e.to_string())?;
    Ok(())
}
