//! # Introduction
//!
//! structty is an interactive calculator for composite type layouts. Types
//! are declared through a command console; the registry caches each type's
//! size and alignment at insertion, and layout requests simulate byte-level
//! placement under three competing strategies, rendered as word-grouped
//! diagrams in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Command pipeline
//!
//! ```text
//! Input line → Lexer → Command → Session → Registry/Layout → TUI
//! ```
//!
//! 1. [`parser`] — tokenises one console line and builds a validated command.
//! 2. [`session`] — executes commands, validates field names, and keeps the
//!    console transcript plus the most recent layout.
//! 3. [`registry`] — the type store: tagged entries for atomics, structs,
//!    and unions with sizes/alignments cached at insertion.
//! 4. [`layout`] — size/alignment derivation, recursive field flattening,
//!    and the three placement strategies (unpacked, packed, heuristic).
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported commands
//!
//! `atomic`, `struct`, `union`, `show`, `types`, `layout`, `packed`,
//! `heuristic`, `wordsize`, `help`, `clear`, `quit`.

pub mod layout;
pub mod parser;
pub mod registry;
pub mod session;
pub mod ui;
