//! Domain Layer
//!
//! Window geometry values and host errors.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod geometry;

pub use error::{HostError, HostResult};
pub use geometry::{resolve_dimension, Axis, AxisLimits, ResizeDecision, WindowPosition, WindowSize};
