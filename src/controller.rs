//! Hotkey decisions: what a key press does to the shared state.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Config;
use crate::keys::FunctionKey;
use crate::state::ClickerState;
use crate::status;

/// Result of handling one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Clicking was switched on or off.
    Toggled { running: bool },
    /// The process is exiting; the listener should stop.
    Quit,
    /// Not one of the configured keys.
    Ignored,
}

pub struct HotkeyController {
    toggle_key: FunctionKey,
    quit_key: FunctionKey,
    state: Arc<ClickerState>,
}

impl HotkeyController {
    pub fn new(config: &Config, state: Arc<ClickerState>) -> Self {
        Self {
            toggle_key: config.toggle_key,
            quit_key: config.quit_key,
            state,
        }
    }

    pub fn state(&self) -> &ClickerState {
        &self.state
    }

    /// Apply a key press. The quit key wins if both bindings match.
    pub fn on_press(&self, key: FunctionKey) -> HotkeyAction {
        if self.state.is_exiting() {
            return HotkeyAction::Quit;
        }

        if key == self.quit_key {
            if self.state.request_exit() {
                info!(%key, "quit key pressed");
                status::exiting();
            }
            return HotkeyAction::Quit;
        }

        if key == self.toggle_key {
            let running = self.state.toggle();
            info!(%key, running, "clicking toggled");
            status::toggled(running);
            return HotkeyAction::Toggled { running };
        }

        debug!(%key, "ignoring unbound key");
        HotkeyAction::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::MouseButton;

    fn controller() -> HotkeyController {
        let config = Config::new(10.0, MouseButton::Left, FunctionKey::F8, FunctionKey::F9).unwrap();
        HotkeyController::new(&config, Arc::new(ClickerState::new()))
    }

    #[test]
    fn test_toggle_key_flips_running() {
        let controller = controller();

        assert_eq!(
            controller.on_press(FunctionKey::F8),
            HotkeyAction::Toggled { running: true }
        );
        assert!(controller.state().is_running());

        assert_eq!(
            controller.on_press(FunctionKey::F8),
            HotkeyAction::Toggled { running: false }
        );
        assert!(!controller.state().is_running());
    }

    #[test]
    fn test_quit_key_sets_exiting() {
        let controller = controller();
        controller.on_press(FunctionKey::F8);

        assert_eq!(controller.on_press(FunctionKey::F9), HotkeyAction::Quit);
        assert!(controller.state().is_exiting());
    }

    #[test]
    fn test_quit_from_idle() {
        let controller = controller();

        assert_eq!(controller.on_press(FunctionKey::F9), HotkeyAction::Quit);
        assert!(controller.state().is_exiting());
        assert!(!controller.state().is_running());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let controller = controller();

        assert_eq!(controller.on_press(FunctionKey::F1), HotkeyAction::Ignored);
        assert_eq!(controller.on_press(FunctionKey::F12), HotkeyAction::Ignored);
        assert!(!controller.state().is_running());
        assert!(!controller.state().is_exiting());
    }

    #[test]
    fn test_no_transitions_after_quit() {
        let controller = controller();
        controller.on_press(FunctionKey::F9);

        assert_eq!(controller.on_press(FunctionKey::F8), HotkeyAction::Quit);
        assert!(!controller.state().is_running());
        assert!(controller.state().is_exiting());
    }
}
