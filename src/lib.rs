//! # Autoclicker
//!
//! A small command-line tool that clicks the mouse at a configurable rate,
//! toggled on and off by a global hotkey.
//!
//! ## Features
//!
//! - Clicks per second, floored at a 0.5 ms interval
//! - Left, right or middle button
//! - Function-key hotkeys for start/stop and quit, independent of focus
//! - Clean shutdown on the quit key or Ctrl-C
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use autoclicker::{ClickWorker, ClickerState, Config, EnigoClicker, FunctionKey, MouseButton};
//!
//! let config = Config::new(12.0, MouseButton::Left, FunctionKey::F8, FunctionKey::F9).unwrap();
//! let state = Arc::new(ClickerState::new());
//!
//! let worker = ClickWorker::spawn(
//!     Arc::clone(&state),
//!     config.button,
//!     config.interval(),
//!     EnigoClicker::new,
//! )
//! .unwrap();
//!
//! state.toggle();
//! std::thread::sleep(Duration::from_secs(1));
//! state.request_exit();
//! worker.shutdown(Duration::from_secs(1));
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod event_loop;
pub mod hotkey;
pub mod injector;
pub mod keys;
pub mod state;
pub mod status;
pub mod worker;

pub use cli::Cli;
pub use config::Config;
pub use controller::{HotkeyAction, HotkeyController};
pub use error::{ClickerError, Result};
pub use hotkey::HotkeyListener;
pub use injector::{Clicker, EnigoClicker};
pub use keys::{FunctionKey, MouseButton};
pub use state::ClickerState;
pub use worker::ClickWorker;
