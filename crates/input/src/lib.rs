//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`InputCommand`]s and keeps the
//! two pieces of input state the front end needs: the board cursor and the
//! main menu.

pub mod cursor;
pub mod map;
pub mod menu;

pub use tui_memory_types as types;

pub use cursor::BoardCursor;
pub use map::{handle_event, handle_key_event, handle_mouse_event, should_quit, InputCommand};
pub use menu::{Menu, MenuChoice, MenuItem, MENU_ITEMS};
