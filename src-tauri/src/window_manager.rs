//! Window Manager
//!
//! Owns the native window handle for its whole lifecycle:
//! attach (create/place), move, resize, detach (destroy).
//! Registered as managed state and handed to the command handlers.

use tauri::{LogicalPosition, LogicalSize, Position, Size, WebviewWindow};

use crate::config::HostConfig;
use crate::domain::{resolve_dimension, Axis, HostError, HostResult, ResizeDecision, WindowPosition, WindowSize};

/// The window operations the manager needs.
///
/// Implemented for Tauri's `WebviewWindow`; tests use an in-memory fake.
pub trait NativeWindow {
    fn logical_position(&self) -> HostResult<WindowPosition>;
    fn move_to(&self, position: WindowPosition) -> HostResult<()>;
    fn logical_size(&self) -> HostResult<WindowSize>;
    fn resize_to(&self, size: WindowSize) -> HostResult<()>;
    fn center_on_screen(&self) -> HostResult<()>;
    fn reveal(&self) -> HostResult<()>;
}

impl From<tauri::Error> for HostError {
    fn from(e: tauri::Error) -> Self {
        HostError::Native(e.to_string())
    }
}

impl NativeWindow for WebviewWindow {
    fn logical_position(&self) -> HostResult<WindowPosition> {
        let scale = self.scale_factor()?;
        let pos = self.outer_position()?.to_logical::<f64>(scale);
        Ok(WindowPosition::new(pos.x.round() as i32, pos.y.round() as i32))
    }

    fn move_to(&self, position: WindowPosition) -> HostResult<()> {
        self.set_position(Position::Logical(LogicalPosition {
            x: f64::from(position.x),
            y: f64::from(position.y),
        }))?;
        Ok(())
    }

    fn logical_size(&self) -> HostResult<WindowSize> {
        let scale = self.scale_factor()?;
        let size = self.outer_size()?.to_logical::<f64>(scale);
        Ok(WindowSize::new(size.width.round() as u32, size.height.round() as u32))
    }

    fn resize_to(&self, size: WindowSize) -> HostResult<()> {
        self.set_size(Size::Logical(LogicalSize {
            width: f64::from(size.width),
            height: f64::from(size.height),
        }))?;
        Ok(())
    }

    fn center_on_screen(&self) -> HostResult<()> {
        self.center()?;
        Ok(())
    }

    fn reveal(&self) -> HostResult<()> {
        self.show()?;
        Ok(())
    }
}

pub struct WindowManager<W: NativeWindow> {
    window: Option<W>,
    config: HostConfig,
    /// Last position this manager placed the window at. Drags accumulate
    /// on it so scale-factor rounding on read-back cannot drift.
    placed: Option<WindowPosition>,
}

impl<W: NativeWindow> WindowManager<W> {
    pub fn new(config: HostConfig) -> Self {
        Self {
            window: None,
            config,
            placed: None,
        }
    }

    fn window(&self) -> HostResult<&W> {
        self.window.as_ref().ok_or(HostError::WindowUnavailable)
    }

    /// Take ownership of the window, place it and show it.
    ///
    /// Without a saved position the window is centred.
    pub fn attach(&mut self, window: W, saved: Option<WindowPosition>) -> HostResult<()> {
        match saved {
            Some(position) => {
                log::info!("Restoring window position ({}, {})", position.x, position.y);
                window.move_to(position)?;
            }
            None => {
                log::info!("No saved position, centering window");
                window.center_on_screen()?;
            }
        }
        window.reveal()?;
        self.window = Some(window);
        self.placed = saved;
        Ok(())
    }

    /// Move the window by a drag delta
    pub fn move_by(&mut self, dx: i32, dy: i32) -> HostResult<WindowPosition> {
        let window = self.window()?;
        let base = match self.placed {
            Some(position) => position,
            None => window.logical_position()?,
        };
        let next = base.offset(dx, dy);
        window.move_to(next)?;
        self.placed = Some(next);
        Ok(next)
    }

    pub fn set_width(&self, width: f64) -> HostResult<ResizeDecision> {
        self.resize(Axis::Width, width)
    }

    pub fn set_height(&self, height: f64) -> HostResult<ResizeDecision> {
        self.resize(Axis::Height, height)
    }

    fn resize(&self, axis: Axis, requested: f64) -> HostResult<ResizeDecision> {
        let window = self.window()?;
        let current = window.logical_size()?;
        let decision = resolve_dimension(current.get(axis), requested, &self.config.limits(axis));

        match decision {
            ResizeDecision::Apply(value) => {
                window.resize_to(current.with(axis, value))?;
                log::debug!("Window {} {} -> {}", axis.as_str(), current.get(axis), value);
            }
            ResizeDecision::Unchanged => {}
            ResizeDecision::Rejected => {
                log::warn!("Invalid {} received: {}", axis.as_str(), requested);
            }
        }
        Ok(decision)
    }

    /// Release the window, returning its final position for persistence.
    ///
    /// Returns `Ok(None)` if nothing was attached. The window is released
    /// even when reading its position fails.
    pub fn detach(&mut self) -> HostResult<Option<WindowPosition>> {
        self.placed = None;
        match self.window.take() {
            Some(window) => window.logical_position().map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeWindow {
        position: Cell<Option<WindowPosition>>,
        size: Cell<Option<WindowSize>>,
        centered: Cell<bool>,
        shown: Cell<bool>,
        /// Added to x on read, like rounding at a fractional scale factor
        read_skew: Cell<i32>,
        resizes: RefCell<Vec<WindowSize>>,
    }

    impl FakeWindow {
        fn at(x: i32, y: i32, width: u32, height: u32) -> Self {
            let w = Self::default();
            w.position.set(Some(WindowPosition::new(x, y)));
            w.size.set(Some(WindowSize::new(width, height)));
            w
        }
    }

    impl NativeWindow for &FakeWindow {
        fn logical_position(&self) -> HostResult<WindowPosition> {
            self.position
                .get()
                .map(|p| p.offset(self.read_skew.get(), 0))
                .ok_or_else(|| HostError::Native("destroyed".to_string()))
        }

        fn move_to(&self, position: WindowPosition) -> HostResult<()> {
            self.position.set(Some(position));
            Ok(())
        }

        fn logical_size(&self) -> HostResult<WindowSize> {
            self.size.get().ok_or_else(|| HostError::Native("destroyed".to_string()))
        }

        fn resize_to(&self, size: WindowSize) -> HostResult<()> {
            self.size.set(Some(size));
            self.resizes.borrow_mut().push(size);
            Ok(())
        }

        fn center_on_screen(&self) -> HostResult<()> {
            self.centered.set(true);
            self.position.set(Some(WindowPosition::new(500, 300)));
            Ok(())
        }

        fn reveal(&self) -> HostResult<()> {
            self.shown.set(true);
            Ok(())
        }
    }

    fn attached(window: &FakeWindow) -> WindowManager<&FakeWindow> {
        let mut manager = WindowManager::new(HostConfig::default());
        manager.attach(window, Some(WindowPosition::new(40, 60))).unwrap();
        manager
    }

    #[test]
    fn test_attach_restores_saved_position() {
        let window = FakeWindow::at(0, 0, 280, 300);
        let manager = attached(&window);
        assert_eq!(window.position.get(), Some(WindowPosition::new(40, 60)));
        assert!(!window.centered.get());
        assert!(window.shown.get());
    }

    #[test]
    fn test_attach_without_saved_position_centers() {
        let window = FakeWindow::at(0, 0, 280, 300);
        let mut manager = WindowManager::new(HostConfig::default());
        manager.attach(&window, None).unwrap();
        assert!(window.centered.get());
        assert!(window.shown.get());
    }

    #[test]
    fn test_move_by_applies_delta() {
        let window = FakeWindow::at(0, 0, 280, 300);
        let mut manager = attached(&window);
        assert_eq!(manager.move_by(15, -20).unwrap(), WindowPosition::new(55, 40));
        assert_eq!(manager.move_by(-5, 0).unwrap(), WindowPosition::new(50, 40));
        assert_eq!(window.position.get(), Some(WindowPosition::new(50, 40)));
    }

    #[test]
    fn test_drag_does_not_drift_on_rounded_reads() {
        let window = FakeWindow::at(0, 0, 280, 300);
        window.read_skew.set(1);
        let mut manager = attached(&window);

        for _ in 0..3 {
            manager.move_by(1, 0).unwrap();
        }
        assert_eq!(window.position.get(), Some(WindowPosition::new(43, 60)));
    }

    #[test]
    fn test_first_move_after_centering_reads_window() {
        let window = FakeWindow::at(0, 0, 280, 300);
        let mut manager = WindowManager::new(HostConfig::default());
        manager.attach(&window, None).unwrap();

        assert_eq!(manager.move_by(5, 5).unwrap(), WindowPosition::new(505, 305));
        assert_eq!(manager.move_by(5, 5).unwrap(), WindowPosition::new(510, 310));
    }

    #[test]
    fn test_height_jitter_does_not_resize() {
        let window = FakeWindow::at(0, 0, 280, 300);
        let manager = attached(&window);

        for h in [295.0, 304.0, 310.0, 300.4] {
            assert_eq!(manager.set_height(h).unwrap(), ResizeDecision::Unchanged);
        }
        assert!(window.resizes.borrow().is_empty());

        assert_eq!(manager.set_height(420.0).unwrap(), ResizeDecision::Apply(420));
        assert_eq!(window.size.get(), Some(WindowSize::new(280, 420)));
    }

    #[test]
    fn test_width_resize_keeps_height() {
        let window = FakeWindow::at(0, 0, 280, 300);
        let manager = attached(&window);

        assert_eq!(manager.set_width(281.0).unwrap(), ResizeDecision::Unchanged);
        assert_eq!(manager.set_width(350.0).unwrap(), ResizeDecision::Apply(350));
        assert_eq!(window.size.get(), Some(WindowSize::new(350, 300)));

        // Clamped to max width
        assert_eq!(manager.set_width(900.0).unwrap(), ResizeDecision::Apply(500));
    }

    #[test]
    fn test_invalid_size_keeps_prior_size() {
        let window = FakeWindow::at(0, 0, 280, 300);
        let manager = attached(&window);

        assert_eq!(manager.set_width(f64::NAN).unwrap(), ResizeDecision::Rejected);
        assert_eq!(manager.set_width(-1.0).unwrap(), ResizeDecision::Rejected);
        assert_eq!(manager.set_height(5000.0).unwrap(), ResizeDecision::Rejected);
        assert_eq!(window.size.get(), Some(WindowSize::new(280, 300)));
        assert!(window.resizes.borrow().is_empty());
    }

    #[test]
    fn test_detach_returns_final_position_once() {
        let window = FakeWindow::at(0, 0, 280, 300);
        let mut manager = attached(&window);
        manager.move_by(10, 10).unwrap();

        assert_eq!(manager.detach().unwrap(), Some(WindowPosition::new(50, 70)));
        assert_eq!(manager.detach().unwrap(), None);
    }

    #[test]
    fn test_operations_after_detach_fail() {
        let window = FakeWindow::at(0, 0, 280, 300);
        let mut manager = attached(&window);
        manager.detach().unwrap();

        assert!(matches!(manager.move_by(1, 1), Err(HostError::WindowUnavailable)));
        assert!(matches!(manager.set_width(300.0), Err(HostError::WindowUnavailable)));
        assert!(matches!(manager.set_height(300.0), Err(HostError::WindowUnavailable)));
    }
}
