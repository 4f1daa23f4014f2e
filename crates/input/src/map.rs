//! Mapping from terminal events to input commands.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the player asked for, independent of screen (menu or round)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Up,
    Down,
    Left,
    Right,
    /// Enter/Space: pick the focused card or menu entry
    Select,
    Restart,
    /// Back to the menu
    Menu,
    Quit,
    /// Left click at terminal cell (column, row)
    Click { x: u16, y: u16 },
    /// Pointer moved to terminal cell (column, row)
    Hover { x: u16, y: u16 },
}

/// Map keyboard input to a command.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    if should_quit(key) {
        return Some(InputCommand::Quit);
    }

    match key.code {
        // Cursor
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(InputCommand::Up),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(InputCommand::Down),
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(InputCommand::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(InputCommand::Right),

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputCommand::Select),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Restart),
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Some(InputCommand::Menu),

        _ => None,
    }
}

/// Map mouse input to a command (left clicks and movement only).
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<InputCommand> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputCommand::Click { x, y }),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputCommand::Hover { x, y }),
        _ => None,
    }
}

/// Map any terminal event; key releases and auto-repeat are ignored.
pub fn handle_event(event: &Event) -> Option<InputCommand> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
