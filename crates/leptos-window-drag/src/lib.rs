//! Leptos Window Drag Utilities
//!
//! Drag-to-move for frameless windows using mouse events.
//! Uses a movement threshold to distinguish click/double-click from drag,
//! then reports screen-space deltas to a callback.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 3;

/// Pointer bookkeeping for a single drag gesture.
///
/// Kept free of DOM types so the press/move/release logic can be
/// exercised without a browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragTracker {
    /// Screen position of the mousedown (pending, not yet dragging)
    start: Option<(i32, i32)>,
    /// Screen position of the last reported motion
    last: (i32, i32),
    dragging: bool,
}

impl DragTracker {
    /// Record a left-button press at screen coordinates.
    pub fn press(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
        self.last = (x, y);
        self.dragging = false;
    }

    /// Feed a pointer motion. Returns the delta since the previous motion
    /// once the gesture has crossed the threshold.
    pub fn motion(&mut self, x: i32, y: i32) -> Option<(i32, i32)> {
        let (start_x, start_y) = self.start?;

        if !self.dragging {
            let dx = (x - start_x).abs();
            let dy = (y - start_y).abs();
            if dx <= DRAG_THRESHOLD_PX && dy <= DRAG_THRESHOLD_PX {
                return None;
            }
            self.dragging = true;
        }

        let delta = (x - self.last.0, y - self.last.1);
        self.last = (x, y);
        if delta == (0, 0) {
            None
        } else {
            Some(delta)
        }
    }

    /// End the gesture. Returns true if it turned into a drag.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.dragging;
        *self = Self::default();
        was_dragging
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_pending(&self) -> bool {
        self.start.is_some()
    }
}

/// Drag state signals
#[derive(Clone, Copy)]
pub struct DragSignals {
    pub tracker_read: ReadSignal<DragTracker>,
    pub tracker_write: WriteSignal<DragTracker>,
    /// True for a short moment after a drag ended, so the trailing
    /// click/dblclick of the gesture can be ignored
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
}

pub fn create_drag_signals() -> DragSignals {
    let (tracker_read, tracker_write) = signal(DragTracker::default());
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    DragSignals {
        tracker_read,
        tracker_write,
        drag_just_ended_read,
        drag_just_ended_write,
    }
}

impl DragSignals {
    pub fn is_dragging(&self) -> bool {
        self.tracker_read.get().is_dragging()
    }

    pub fn drag_just_ended(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

/// Mark the drag as ended and clear the flag again shortly after
fn end_drag(drag: &DragSignals) {
    drag.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = drag.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 300);
        cb.forget();
    }
}

/// True when the event started on a control that owns its own mouse handling
pub fn is_interactive_target(ev: &web_sys::MouseEvent) -> bool {
    let Some(target) = ev.target() else {
        return false;
    };
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
}

/// Create mousedown handler for draggable chrome
/// Records a pending drag at the pointer's screen position
pub fn make_on_mousedown(drag: DragSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_interactive_target(&ev) {
            return;
        }
        let mut tracker = drag.tracker_read.get_untracked();
        tracker.press(ev.screen_x(), ev.screen_y());
        drag.tracker_write.set(tracker);
    }
}

/// Bind document-level mousemove/mouseup handlers.
///
/// `on_move` receives `(dx, dy)` in screen pixels for every motion after
/// the threshold has been crossed.
pub fn bind_window_drag<F>(drag: DragSignals, on_move: F)
where
    F: Fn(i32, i32) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let mut tracker = drag.tracker_read.get_untracked();
        if !tracker.is_pending() {
            return;
        }
        let delta = tracker.motion(ev.screen_x(), ev.screen_y());
        drag.tracker_write.set(tracker);
        if let Some((dx, dy)) = delta {
            on_move(dx, dy);
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let mut tracker = drag.tracker_read.get_untracked();
        if !tracker.is_pending() {
            return;
        }
        let was_dragging = tracker.release();
        drag.tracker_write.set(tracker);
        if was_dragging {
            end_drag(&drag);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}
