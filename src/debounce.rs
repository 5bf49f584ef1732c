//! Pending Timer
//!
//! Single-slot debounce holder. Scheduling replaces the pending handle;
//! dropping a `gloo_timers` `Timeout` cancels it, so the last request wins.

use gloo_timers::callback::Timeout;

pub struct PendingTimer<H = Timeout> {
    slot: Option<H>,
}

impl<H> Default for PendingTimer<H> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<H> PendingTimer<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new handle, dropping (cancelling) the previous one
    pub fn replace(&mut self, handle: H) {
        self.slot = Some(handle);
    }
}

impl PendingTimer<Timeout> {
    /// Run `callback` after `delay_ms`, unless another call comes first
    pub fn schedule<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.replace(Timeout::new(delay_ms, callback));
    }
}
