//! Command-line interface.

use clap::Parser;

use crate::config::{self, Config};
use crate::error::Result;
use crate::keys::{FunctionKey, MouseButton};

const AFTER_HELP: &str = "\
Hotkeys (changeable via flags):
  Start/Stop toggle: F8
  Quit:              F9

Examples:
  autoclicker --cps 12                        12 clicks per second, left button
  autoclicker --button right                  right button instead
  autoclicker --start-key f6 --quit-key f7

Notes (macOS):
  Grant Accessibility permission to your terminal or IDE:
  System Settings > Privacy & Security > Accessibility.";

#[derive(Parser, Debug)]
#[command(name = "autoclicker")]
#[command(version, about = "Simple autoclicker with hotkeys.", after_help = AFTER_HELP)]
pub struct Cli {
    /// Clicks per second
    #[arg(long, default_value_t = config::DEFAULT_CPS, value_parser = parse_cps_arg)]
    pub cps: f64,

    /// Mouse button
    #[arg(long, value_enum, default_value_t = MouseButton::Left)]
    pub button: MouseButton,

    /// Toggle key
    #[arg(long, value_enum, default_value_t = FunctionKey::F8)]
    pub start_key: FunctionKey,

    /// Quit key
    #[arg(long, value_enum, default_value_t = FunctionKey::F9)]
    pub quit_key: FunctionKey,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<Config> {
        Config::new(self.cps, self.button, self.start_key, self.quit_key)
    }
}

fn parse_cps_arg(value: &str) -> std::result::Result<f64, String> {
    config::parse_cps(value).map_err(|e| e.to_string())
}
