//! Console front end
//!
//! - `menu`: the numbered main menu
//! - `table`: fixed-width record listings
//! - `console`: the prompt loop that drives a registry

pub mod console;
pub mod menu;
pub mod table;

pub use console::Console;
pub use menu::{MENU_LINE, MenuChoice};
pub use table::write_table;
