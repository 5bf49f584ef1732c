//! Host Errors
//!
//! Error type shared by the window manager, position store and config.

/// Common result type for host operations
pub type HostResult<T> = Result<T, HostError>;

/// Host-level errors
#[derive(Debug)]
pub enum HostError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
    /// No native window is attached (not created yet, or already closed)
    WindowUnavailable,
    /// Error reported by the windowing backend
    Native(String),
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::Io(e) => write!(f, "I/O error: {}", e),
            HostError::Serialize(e) => write!(f, "Serialization error: {}", e),
            HostError::WindowUnavailable => write!(f, "Window not available"),
            HostError::Native(msg) => write!(f, "Window backend error: {}", msg),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::Io(e) => Some(e),
            HostError::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HostError {
    fn from(e: std::io::Error) -> Self {
        HostError::Io(e)
    }
}

impl From<serde_json::Error> for HostError {
    fn from(e: serde_json::Error) -> Self {
        HostError::Serialize(e)
    }
}
