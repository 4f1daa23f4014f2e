//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer. It avoids widget/layout libraries
//! and renders into a plain framebuffer that is diffed and flushed to the
//! terminal.
//!
//! - [`RoundView`] and [`MenuView`] are pure: snapshot in, framebuffer out
//! - [`BoardLayout`] owns the geometry, so drawing and mouse hit-testing agree
//! - [`TerminalRenderer`] is the only part that does I/O

pub mod fb;
pub mod layout;
pub mod menu_view;
pub mod render_throttle;
pub mod renderer;
pub mod round_view;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use layout::{BoardLayout, Rect, Viewport};
pub use menu_view::MenuView;
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use round_view::{frame_fingerprint, RoundView};
