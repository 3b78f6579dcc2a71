//! Synthetic mouse clicks.
//!
//! [`Clicker`] is the seam between the click worker and the OS. The worker only
//! ever asks for one press-and-release of a button at the current pointer
//! position; [`EnigoClicker`] fulfils that through `enigo`.

use enigo::{Button, Direction, Enigo, Mouse, Settings};
use tracing::debug;

use crate::error::{ClickerError, Result};
use crate::keys::MouseButton;

/// Something that can click a mouse button.
pub trait Clicker {
    /// Press and release `button` once at the current pointer location.
    fn click(&mut self, button: MouseButton) -> Result<()>;
}

/// Clicker backed by the platform input APIs.
pub struct EnigoClicker {
    enigo: Enigo,
}

impl EnigoClicker {
    pub fn new() -> Result<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| ClickerError::injector(e.to_string()))?;

        debug!("input injection backend initialised");
        Ok(Self { enigo })
    }
}

impl Clicker for EnigoClicker {
    fn click(&mut self, button: MouseButton) -> Result<()> {
        self.enigo
            .button(to_enigo_button(button), Direction::Click)
            .map_err(|e| ClickerError::injection(button.name(), e.to_string()))
    }
}

fn to_enigo_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
    }
}
