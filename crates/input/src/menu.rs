//! Main menu model.
//!
//! Six entries in a fixed order: three grid sizes, the two display modes and
//! Close. Picking a display mode only records it; picking a grid size starts
//! a round in the mode chosen so far.

use crate::map::InputCommand;
use crate::types::{DisplayMode, GridSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Grid(GridSize),
    Mode(DisplayMode),
    Close,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Grid(grid) => grid.label(),
            MenuItem::Mode(DisplayMode::Light) => "Light Mode",
            MenuItem::Mode(DisplayMode::Dark) => "Dark Mode",
            MenuItem::Close => "Close",
        }
    }
}

pub const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem::Grid(GridSize::Small),
    MenuItem::Grid(GridSize::Medium),
    MenuItem::Grid(GridSize::Large),
    MenuItem::Mode(DisplayMode::Light),
    MenuItem::Mode(DisplayMode::Dark),
    MenuItem::Close,
];

/// Result of activating a menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start { grid: GridSize, mode: DisplayMode },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Menu {
    focused: usize,
    mode: DisplayMode,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(DisplayMode::default())
    }
}

impl Menu {
    pub fn new(mode: DisplayMode) -> Self {
        Self { focused: 0, mode }
    }

    pub fn items(&self) -> &'static [MenuItem] {
        &MENU_ITEMS
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Display mode the next round starts in.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Move focus to `index` (pointer hover). Out-of-range is ignored.
    pub fn focus(&mut self, index: usize) {
        if index < MENU_ITEMS.len() {
            self.focused = index;
        }
    }

    /// Activate the entry at `index`.
    pub fn choose(&mut self, index: usize) -> Option<MenuChoice> {
        let item = *MENU_ITEMS.get(index)?;
        self.focused = index;
        match item {
            MenuItem::Grid(grid) => Some(MenuChoice::Start {
                grid,
                mode: self.mode,
            }),
            MenuItem::Mode(mode) => {
                self.mode = mode;
                None
            }
            MenuItem::Close => Some(MenuChoice::Quit),
        }
    }

    /// Keyboard navigation. Mouse commands are resolved by the caller's
    /// hit-test and fed through [`Menu::focus`] / [`Menu::choose`].
    pub fn handle(&mut self, cmd: InputCommand) -> Option<MenuChoice> {
        let n = MENU_ITEMS.len();
        match cmd {
            InputCommand::Up | InputCommand::Left => {
                self.focused = (self.focused + n - 1) % n;
                None
            }
            InputCommand::Down | InputCommand::Right => {
                self.focused = (self.focused + 1) % n;
                None
            }
            InputCommand::Select => self.choose(self.focused),
            InputCommand::Quit => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}
