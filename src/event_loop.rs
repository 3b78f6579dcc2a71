//! Platform event pumping for the hotkey listener.
//!
//! Hotkey notifications are delivered through the platform's own event queue
//! on the thread that registered them. Windows needs its message queue drained
//! and macOS needs its run loop turned; elsewhere the library runs its own
//! thread and waiting is enough.

use std::time::Duration;

/// Process pending platform events, waiting at most roughly `timeout`.
#[cfg(windows)]
pub fn pump_events(timeout: Duration) {
    use std::{mem, ptr};
    use winapi::um::winuser::{DispatchMessageW, PeekMessageW, TranslateMessage, MSG, PM_REMOVE};

    unsafe {
        let mut msg: MSG = mem::zeroed();
        while PeekMessageW(&mut msg, ptr::null_mut(), 0, 0, PM_REMOVE) != 0 {
            TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    std::thread::sleep(timeout);
}

/// Process pending platform events, waiting at most roughly `timeout`.
#[cfg(target_os = "macos")]
pub fn pump_events(timeout: Duration) {
    use core_foundation::runloop::{kCFRunLoopDefaultMode, CFRunLoop};

    unsafe {
        CFRunLoop::run_in_mode(kCFRunLoopDefaultMode, timeout, true);
    }
}

/// Process pending platform events, waiting at most roughly `timeout`.
#[cfg(not(any(windows, target_os = "macos")))]
pub fn pump_events(timeout: Duration) {
    std::thread::sleep(timeout);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_pump_returns() {
        let start = Instant::now();
        pump_events(Duration::from_millis(5));
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
