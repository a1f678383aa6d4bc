//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Command, Focus, KEYBOARD_ROWS, run_tui};
