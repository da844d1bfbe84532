//! Platform abstraction layer
//!
//! The frame loop only needs one thing from the platform besides a surface:
//! a non-blocking "has the user asked us to stop?" query, polled once per frame.

use std::cell::Cell;
use std::rc::Rc;

/// Termination request source, polled at the top of every frame
pub trait TerminationSignal {
    fn requested(&mut self) -> bool;
}

impl<F: FnMut() -> bool> TerminationSignal for F {
    fn requested(&mut self) -> bool {
        self()
    }
}

/// Shared exit flag, set from event handlers and read by the frame loop
#[derive(Debug, Clone, Default)]
pub struct ExitFlag(Rc<Cell<bool>>);

impl ExitFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.set(true);
    }

    pub fn is_set(&self) -> bool {
        self.0.get()
    }
}

impl TerminationSignal for ExitFlag {
    fn requested(&mut self) -> bool {
        self.is_set()
    }
}

/// Requests termination after a fixed number of polls (headless runs)
#[derive(Debug, Clone, Copy)]
pub struct FrameBudget {
    remaining: u64,
}

impl FrameBudget {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl TerminationSignal for FrameBudget {
    fn requested(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}

#[cfg(target_arch = "wasm32")]
pub mod web {
    //! Browser event wiring for the exit flag

    use wasm_bindgen::prelude::*;

    use super::ExitFlag;

    /// Escape key or leaving the page requests termination
    pub fn install_exit_handlers(window: &web_sys::Window, flag: &ExitFlag) {
        {
            let flag = flag.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.key() == "Escape" {
                    log::info!("Exit requested (Escape)");
                    flag.request();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let flag = flag.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                log::info!("Exit requested (pagehide)");
                flag.request();
            });
            let _ = window
                .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_flag_is_shared() {
        let flag = ExitFlag::new();
        let mut reader = flag.clone();
        assert!(!reader.requested());
        flag.request();
        assert!(reader.requested());
    }

    #[test]
    fn test_frame_budget() {
        let mut budget = FrameBudget::new(2);
        assert!(!budget.requested());
        assert!(!budget.requested());
        assert!(budget.requested());
        assert!(budget.requested());
    }

    #[test]
    fn test_closure_signal() {
        let mut polls = 0;
        let mut signal = || {
            polls += 1;
            polls > 1
        };
        assert!(!signal.requested());
        assert!(signal.requested());
    }
}
