//! ghdash library
//!
//! Footer and search-bar chrome for a terminal dashboard of GitHub pull
//! requests and issues, built around a width-exact status-line compositor.

pub mod config;
pub mod context;
pub mod git;
pub mod keys;
pub mod layout;
pub mod logging;
pub mod theme;
pub mod tui;

pub use config::Config;
pub use context::{ProgramContext, ViewType};
pub use layout::{compose, measure_width, ComposedLine, LayoutError, Segment, StatusLine};
pub use theme::{Theme, ThemeError};
