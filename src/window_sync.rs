//! Window Geometry Sync
//!
//! Debounces desired window sizes and sends each axis to the host
//! independently. One pending timer per axis; an axis whose target did not
//! move keeps its pending request untouched.

use leptos::task::spawn_local;

use crate::commands;
use crate::debounce::PendingTimer;
use crate::geometry::TargetGeometry;

/// Default debounce delay for resize requests
pub const RESIZE_DEBOUNCE_MS: u32 = 50;

/// Last value requested on each axis
#[derive(Debug, Default)]
struct AxisRequests {
    width: Option<u32>,
    height: Option<u32>,
}

impl AxisRequests {
    /// Record `target` and return the axes whose value changed
    fn changed(&mut self, target: TargetGeometry) -> (Option<u32>, Option<u32>) {
        let width = (self.width != Some(target.width)).then_some(target.width);
        let height = (self.height != Some(target.height)).then_some(target.height);
        self.width = Some(target.width);
        self.height = Some(target.height);
        (width, height)
    }
}

pub struct WindowSync {
    width: PendingTimer,
    height: PendingTimer,
    requested: AxisRequests,
    delay_ms: u32,
}

impl WindowSync {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            width: PendingTimer::new(),
            height: PendingTimer::new(),
            requested: AxisRequests::default(),
            delay_ms,
        }
    }

    /// Schedule the axes that moved, replacing whatever is still pending on them
    pub fn request(&mut self, target: TargetGeometry) {
        let (width, height) = self.requested.changed(target);

        if let Some(width) = width {
            self.width.schedule(self.delay_ms, move || {
                spawn_local(async move {
                    if let Err(e) = commands::set_window_width(width).await {
                        web_sys::console::warn_1(&format!("[SYNC] width {} not sent: {}", width, e).into());
                    }
                });
            });
        }

        if let Some(height) = height {
            self.height.schedule(self.delay_ms, move || {
                spawn_local(async move {
                    if let Err(e) = commands::set_window_height(height).await {
                        web_sys::console::warn_1(&format!("[SYNC] height {} not sent: {}", height, e).into());
                    }
                });
            });
        }
    }
}
