//! Console status lines.

use colored::Colorize;

use crate::config::Config;

const PREFIX: &str = "[autoclicker]";

pub fn settings(config: &Config) {
    println!(
        "{} cps={}, button={}, start={}, quit={}",
        PREFIX.bold(),
        config.cps,
        config.button,
        config.toggle_key,
        config.quit_key
    );
}

pub fn ready() {
    println!(
        "{} Ready. Press your start/stop key to toggle, quit key to exit.",
        PREFIX.bold()
    );
}

pub fn toggled(running: bool) {
    let label = if running { "ON".green() } else { "OFF".yellow() };
    println!("{} Toggled {}", PREFIX.bold(), label);
}

pub fn exiting() {
    println!("{} Exiting…", PREFIX.bold());
}
