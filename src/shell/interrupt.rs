//! Interactive interrupt (Ctrl+C) handling for foreground runs.
//!
//! While an [`InterruptGuard`] is alive, Ctrl+C no longer terminates the
//! launcher. It only records that the user asked to stop, so the foreground
//! wait can finish and report the stop. The terminal delivers the same
//! interrupt to the child, which shuts itself down.
//!
//! The process-wide handler is registered once. Outside a guard it exits
//! with status 130, so probing and installing stay interruptible.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static ARMED: AtomicBool = AtomicBool::new(false);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static REGISTER: Once = Once::new();

/// Exit status used when Ctrl+C arrives outside a foreground run.
const INTERRUPT_EXIT_CODE: i32 = 130;

/// Serializes tests that install guards or raise signals in-process.
#[cfg(test)]
pub(crate) static SIGNAL_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

fn on_interrupt() {
    if ARMED.load(Ordering::SeqCst) {
        INTERRUPTED.store(true, Ordering::SeqCst);
    } else {
        std::process::exit(INTERRUPT_EXIT_CODE);
    }
}

fn register_handler() {
    REGISTER.call_once(|| {
        if let Err(e) = ctrlc::set_handler(on_interrupt) {
            tracing::warn!("Could not install interrupt handler: {}", e);
        }
    });
}

/// Scoped Ctrl+C capture.
#[derive(Debug)]
pub struct InterruptGuard {
    _private: (),
}

impl InterruptGuard {
    /// Start catching Ctrl+C.
    pub fn install() -> Self {
        register_handler();
        INTERRUPTED.store(false, Ordering::SeqCst);
        ARMED.store(true, Ordering::SeqCst);
        Self { _private: () }
    }

    /// Whether Ctrl+C arrived since the guard was installed.
    pub fn interrupted(&self) -> bool {
        INTERRUPTED.load(Ordering::SeqCst)
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        ARMED.store(false, Ordering::SeqCst);
    }
}
