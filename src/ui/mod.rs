//! Ratatui front end
//!
//! Renders the session state in four regions: the console transcript, the
//! registered-types listing, the memory layout diagram, and the command input
//! line with a status bar underneath. Not part of the stable library API.

mod app;
pub mod panes;
pub mod theme;

pub use app::{App, FocusedPane};
