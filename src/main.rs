//! Student Registry entry point
//!
//! Loads settings and the data file, then runs the menu on stdin/stdout.

use std::io;

use student_registry::settings::SETTINGS_FILE;
use student_registry::ui::Console;
use student_registry::{Registry, Settings};

fn main() {
    env_logger::init();
    log::info!("Student Registry starting...");

    let settings = Settings::load(SETTINGS_FILE);
    let mut registry = Registry::load_or_default(&settings.data_file);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), settings);
    if let Err(e) = console.run(&mut registry) {
        log::error!("Console I/O failed: {}", e);
    }
    log::info!("Student Registry exiting with {} records in memory", registry.len());
}
