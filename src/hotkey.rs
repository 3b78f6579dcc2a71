//! Global hotkey registration and the blocking listen loop.

use std::collections::HashMap;
use std::time::Duration;

use global_hotkey::hotkey::HotKey;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::controller::{HotkeyAction, HotkeyController};
use crate::error::{ClickerError, Result};
use crate::event_loop;
use crate::keys::FunctionKey;

/// How long each listener pass waits for platform events.
pub const LISTENER_POLL: Duration = Duration::from_millis(10);

/// Owns the OS hotkey registrations for the toggle and quit keys.
pub struct HotkeyListener {
    manager: GlobalHotKeyManager,
    hotkeys: Vec<HotKey>,
    bindings: HashMap<u32, FunctionKey>,
}

impl HotkeyListener {
    /// Register the configured keys with the OS.
    ///
    /// Must be called on the thread that will later call [`run`](Self::run).
    pub fn register(config: &Config) -> Result<Self> {
        let manager = GlobalHotKeyManager::new().map_err(|e| {
            ClickerError::hotkey(format!("failed to create global hotkey manager: {e}"))
        })?;

        let mut listener = Self {
            manager,
            hotkeys: Vec::new(),
            bindings: HashMap::new(),
        };

        for key in [config.toggle_key, config.quit_key] {
            listener.bind(key)?;
        }

        Ok(listener)
    }

    fn bind(&mut self, key: FunctionKey) -> Result<()> {
        let hotkey = hotkey_for(key);

        self.manager
            .register(hotkey)
            .map_err(|e| ClickerError::hotkey(format!("failed to register hotkey '{key}': {e}")))?;

        debug!(%key, id = hotkey.id(), "hotkey registered");
        self.hotkeys.push(hotkey);
        self.bindings.insert(hotkey.id(), key);
        Ok(())
    }

    /// Block the calling thread, feeding key presses to `controller` until it
    /// asks to quit or the exit flag is set from elsewhere.
    pub fn run(&self, controller: &HotkeyController) {
        let receiver = GlobalHotKeyEvent::receiver();
        info!("hotkey listener started");

        'listen: while !controller.state().is_exiting() {
            event_loop::pump_events(LISTENER_POLL);

            while let Ok(event) = receiver.try_recv() {
                if event.state != HotKeyState::Pressed {
                    continue;
                }

                let Some(&key) = self.bindings.get(&event.id) else {
                    continue;
                };

                if controller.on_press(key) == HotkeyAction::Quit {
                    break 'listen;
                }
            }
        }

        info!("hotkey listener stopped");
    }
}

impl Drop for HotkeyListener {
    fn drop(&mut self) {
        for hotkey in self.hotkeys.drain(..) {
            if let Err(e) = self.manager.unregister(hotkey) {
                warn!(error = %e, "failed to unregister hotkey");
            }
        }
    }
}

/// A bare function key with no modifiers.
pub fn hotkey_for(key: FunctionKey) -> HotKey {
    HotKey::new(None, key.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotkey_ids_differ_per_key() {
        let toggle = hotkey_for(FunctionKey::F8);
        let quit = hotkey_for(FunctionKey::F9);

        assert_ne!(toggle.id(), quit.id());
        assert_eq!(toggle.id(), hotkey_for(FunctionKey::F8).id());
    }
}
