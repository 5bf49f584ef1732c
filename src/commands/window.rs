//! Window Bridge Commands
//!
//! Fire-and-forget calls to the host: move by a drag delta, and per-axis
//! resize requests. The page can load before Tauri injects its global API,
//! so calls wait for the bridge with a bounded number of retries.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::invoke;

/// Delay between bridge availability checks
pub const BRIDGE_RETRY_DELAY_MS: u32 = 100;
/// Checks before a call is dropped
pub const BRIDGE_RETRY_ATTEMPTS: u32 = 20;

// ========================
// Types
// ========================

#[derive(Serialize)]
struct MoveArgs {
    #[serde(rename = "deltaX")]
    delta_x: i32,
    #[serde(rename = "deltaY")]
    delta_y: i32,
}

#[derive(Serialize)]
struct WidthArgs {
    width: u32,
}

#[derive(Serialize)]
struct HeightArgs {
    height: u32,
}

// ========================
// Bridge
// ========================

/// True once `window.__TAURI__` has been injected
fn bridge_ready() -> bool {
    let Some(win) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&win, &JsValue::from_str("__TAURI__"))
        .map(|api| !api.is_undefined() && !api.is_null())
        .unwrap_or(false)
}

/// Poll `ready` up to `BRIDGE_RETRY_ATTEMPTS` times, awaiting `pause`
/// between checks. Returns the attempt index that succeeded.
async fn wait_for_bridge<R, P, F>(mut ready: R, mut pause: P) -> Result<u32, String>
where
    R: FnMut() -> bool,
    P: FnMut() -> F,
    F: Future<Output = ()>,
{
    for attempt in 0..BRIDGE_RETRY_ATTEMPTS {
        if ready() {
            return Ok(attempt);
        }
        pause().await;
    }
    Err(format!("Bridge unavailable after {} attempts", BRIDGE_RETRY_ATTEMPTS))
}

async fn invoke_when_ready(cmd: &str, args: JsValue) -> Result<JsValue, String> {
    let attempt = wait_for_bridge(bridge_ready, || TimeoutFuture::new(BRIDGE_RETRY_DELAY_MS))
        .await
        .map_err(|e| format!("{}, dropped {}", e, cmd))?;
    if attempt > 0 {
        web_sys::console::log_1(&format!("[BRIDGE] Ready after {} retries for {}", attempt, cmd).into());
    }
    invoke(cmd, args).await.map_err(|e| format!("{:?}", e))
}

// ========================
// Commands
// ========================

pub async fn move_window(delta_x: i32, delta_y: i32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&MoveArgs { delta_x, delta_y }).map_err(|e| e.to_string())?;
    invoke_when_ready("move_window", js_args).await?;
    Ok(())
}

pub async fn set_window_width(width: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&WidthArgs { width }).map_err(|e| e.to_string())?;
    invoke_when_ready("set_window_width", js_args).await?;
    Ok(())
}

pub async fn set_window_height(height: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&HeightArgs { height }).map_err(|e| e.to_string())?;
    invoke_when_ready("set_window_height", js_args).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::pin::pin;
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn noop_waker() -> Waker {
        fn clone(_: *const ()) -> RawWaker {
            RawWaker::new(std::ptr::null(), &VTABLE)
        }
        fn noop(_: *const ()) {}
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
        // SAFETY: every vtable entry ignores the data pointer
        unsafe { Waker::from_raw(RawWaker::new(std::ptr::null(), &VTABLE)) }
    }

    /// Drive a future whose pauses complete immediately
    fn run_now<F: Future>(fut: F) -> F::Output {
        let mut fut = pin!(fut);
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(out) => out,
            Poll::Pending => panic!("future suspended"),
        }
    }

    #[test]
    fn test_ready_immediately_skips_pause() {
        let pauses = Cell::new(0);
        let result = run_now(wait_for_bridge(
            || true,
            || {
                pauses.set(pauses.get() + 1);
                std::future::ready(())
            },
        ));
        assert_eq!(result, Ok(0));
        assert_eq!(pauses.get(), 0);
    }

    #[test]
    fn test_ready_on_later_attempt_stops_polling() {
        let checks = Cell::new(0);
        let pauses = Cell::new(0);
        let result = run_now(wait_for_bridge(
            || {
                checks.set(checks.get() + 1);
                checks.get() == 5
            },
            || {
                pauses.set(pauses.get() + 1);
                std::future::ready(())
            },
        ));
        assert_eq!(result, Ok(4));
        assert_eq!(checks.get(), 5);
        assert_eq!(pauses.get(), 4);
    }

    #[test]
    fn test_never_ready_gives_up_after_limit() {
        let checks = Cell::new(0);
        let result = run_now(wait_for_bridge(
            || {
                checks.set(checks.get() + 1);
                false
            },
            || std::future::ready(()),
        ));
        assert!(result.is_err());
        assert_eq!(checks.get(), BRIDGE_RETRY_ATTEMPTS);
    }
}
