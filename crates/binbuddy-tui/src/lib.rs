// Terminal UI implementation using ratatui
// The friendly face of BinBuddy

pub mod app;
pub mod runner;
pub mod ui;

pub use app::{App, Modal, Screen};
pub use runner::run_tui;
