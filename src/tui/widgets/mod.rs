//! TUI widgets for ghdash
//!
//! Reusable chrome for the dashboard: footer, search bar and help panel.

pub mod footer;
pub mod help;
pub mod search_bar;

pub use footer::{Footer, FooterWidget, CONFIRM_QUIT_PROMPT};
pub use help::full_help_lines;
pub use search_bar::{SearchBar, SearchBarWidget, SearchOptions, SEARCH_BAR_HEIGHT};
