//! TUI Memory (workspace facade crate).
//!
//! Re-exports the workspace crates under `tui_memory::{core,input,term,types}`
//! and hosts the terminal front end's screen logic.

pub mod app;
pub mod settings;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;

pub use app::{App, Screen, ShellSink};
pub use settings::{init_logging, ShellConfig};
