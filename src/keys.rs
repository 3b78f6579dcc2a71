//! Hotkey and mouse button identifiers.

use std::fmt;

use clap::ValueEnum;
use global_hotkey::hotkey::Code;

/// Mouse button to click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn name(self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Right => "right",
            MouseButton::Middle => "middle",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Function key usable as a global hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FunctionKey {
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl FunctionKey {
    pub fn name(self) -> &'static str {
        match self {
            FunctionKey::F1 => "f1",
            FunctionKey::F2 => "f2",
            FunctionKey::F3 => "f3",
            FunctionKey::F4 => "f4",
            FunctionKey::F5 => "f5",
            FunctionKey::F6 => "f6",
            FunctionKey::F7 => "f7",
            FunctionKey::F8 => "f8",
            FunctionKey::F9 => "f9",
            FunctionKey::F10 => "f10",
            FunctionKey::F11 => "f11",
            FunctionKey::F12 => "f12",
        }
    }

    /// Physical key code used when registering the hotkey.
    pub fn code(self) -> Code {
        match self {
            FunctionKey::F1 => Code::F1,
            FunctionKey::F2 => Code::F2,
            FunctionKey::F3 => Code::F3,
            FunctionKey::F4 => Code::F4,
            FunctionKey::F5 => Code::F5,
            FunctionKey::F6 => Code::F6,
            FunctionKey::F7 => Code::F7,
            FunctionKey::F8 => Code::F8,
            FunctionKey::F9 => Code::F9,
            FunctionKey::F10 => Code::F10,
            FunctionKey::F11 => Code::F11,
            FunctionKey::F12 => Code::F12,
        }
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
