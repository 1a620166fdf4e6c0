//! TUI (Text User Interface) module for ghdash
//!
//! Terminal lifecycle, event polling, the dashboard shell and its widgets,
//! built on ratatui/crossterm.

pub mod app;
pub mod dashboard;
pub mod event;
pub mod widgets;

pub use dashboard::{DashboardState, Mode, Outcome};
