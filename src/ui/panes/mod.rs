//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility:
//!
//! - [`console`]: session transcript (command echoes, results, errors)
//! - [`input`]: the single-line command editor
//! - [`types`]: registry listing with cached sizes and alignments
//! - [`layout`]: byte-level memory diagram of the last layout request
//! - [`status`]: status bar with keybindings and session counters
//!
//! Every pane is a pure consumer of session state: it receives references
//! into the [`Session`](crate::session::Session) plus a mutable scroll
//! offset, clamps the offset against its own content height, and draws.

pub mod console;
pub mod input;
pub mod layout;
pub mod status;
pub mod types;

// Re-export render functions for convenience
pub use console::render_console_pane;
pub use input::render_input_line;
pub use layout::render_layout_pane;
pub use status::render_status_bar;
pub use types::render_types_pane;
