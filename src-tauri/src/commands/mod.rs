//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod window_cmd;

pub use window_cmd::*;
