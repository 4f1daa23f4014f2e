//! Screen state machine for the terminal front end.
//!
//! `App` owns the menu, the current round and the keyboard cursor, and turns
//! [`InputCommand`]s into core calls. It does no I/O, so whole sessions can
//! be driven from tests.

use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::core::{ConfigError, EventSink, Round, RoundConfig, RoundSnapshot};
use crate::input::{BoardCursor, InputCommand, Menu, MenuChoice};
use crate::term::{frame_fingerprint, FrameBuffer, MenuView, RoundView, Viewport};
use crate::types::{DisplayMode, GridSize, RoundEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
}

/// Logs round events and counts bells for the renderer to ring.
#[derive(Debug, Clone)]
pub struct ShellSink {
    bell: bool,
    bells: Rc<Cell<u32>>,
}

impl ShellSink {
    pub fn new(bell: bool, bells: Rc<Cell<u32>>) -> Self {
        Self { bell, bells }
    }
}

impl EventSink for ShellSink {
    fn notify(&mut self, event: RoundEvent) {
        match event {
            RoundEvent::Flip { index } => log::debug!("flip {index}"),
            RoundEvent::Match { first, second } => log::debug!("match {first}/{second}"),
            RoundEvent::Mismatch { first, second } => log::debug!("mismatch {first}/{second}"),
            RoundEvent::Complete => log::info!("round complete"),
        }
        if self.bell && matches!(event, RoundEvent::Match { .. } | RoundEvent::Mismatch { .. }) {
            self.bells.set(self.bells.get().saturating_add(1));
        }
    }
}

pub struct App {
    base: RoundConfig,
    bell: bool,
    screen: Screen,
    menu: Menu,
    round: Option<Round>,
    cursor: BoardCursor,
    snap: RoundSnapshot,
    bells: Rc<Cell<u32>>,
    /// Why the last start attempt failed; shown on the menu
    last_error: Option<ConfigError>,
    quit: bool,
    menu_view: MenuView,
    round_view: RoundView,
}

impl App {
    pub fn new(base: RoundConfig, bell: bool) -> Self {
        let menu = Menu::new(base.mode);
        Self {
            base,
            bell,
            screen: Screen::Menu,
            menu,
            round: None,
            cursor: BoardCursor::default(),
            snap: RoundSnapshot::default(),
            bells: Rc::new(Cell::new(0)),
            last_error: None,
            quit: false,
            menu_view: MenuView::new(),
            round_view: RoundView::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn last_error(&self) -> Option<&ConfigError> {
        self.last_error.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Bells queued since the last call.
    pub fn take_bells(&mut self) -> u32 {
        self.bells.replace(0)
    }

    /// Start a round directly, bypassing the menu (e.g. `MEMORY_GRID` set).
    ///
    /// On failure the app stays on the menu and keeps the error for display.
    pub fn start(&mut self, grid: GridSize, mode: DisplayMode) -> Result<(), ConfigError> {
        let config = self.base.clone().with_grid(grid).with_mode(mode);
        let sink = ShellSink::new(self.bell, Rc::clone(&self.bells));
        match Round::with_sink(config, sink) {
            Ok(round) => {
                let board = round.board();
                self.cursor.reset(board.rows(), board.cols());
                self.round = Some(round);
                self.screen = Screen::Playing;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                log::warn!("cannot start {}: {e}", grid.label());
                self.screen = Screen::Menu;
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn back_to_menu(&mut self) {
        if let Some(round) = self.round.take() {
            self.menu = Menu::new(round.mode());
        }
        self.screen = Screen::Menu;
    }

    pub fn handle(&mut self, cmd: InputCommand, viewport: Viewport) {
        if cmd == InputCommand::Quit {
            self.quit = true;
            return;
        }
        match self.screen {
            Screen::Menu => self.handle_menu(cmd, viewport),
            Screen::Playing => self.handle_round(cmd, viewport),
        }
    }

    fn handle_menu(&mut self, cmd: InputCommand, viewport: Viewport) {
        let choice = match cmd {
            InputCommand::Hover { x, y } => {
                if let Some(i) = self.menu_view.hit_test(&self.menu, viewport, x, y) {
                    self.menu.focus(i);
                }
                None
            }
            InputCommand::Click { x, y } => self
                .menu_view
                .hit_test(&self.menu, viewport, x, y)
                .and_then(|i| self.menu.choose(i)),
            other => self.menu.handle(other),
        };

        match choice {
            Some(MenuChoice::Start { grid, mode }) => {
                // Failure is kept in `last_error` and drawn on the menu.
                let _ = self.start(grid, mode);
            }
            Some(MenuChoice::Quit) => self.quit = true,
            None => {}
        }
    }

    fn handle_round(&mut self, cmd: InputCommand, viewport: Viewport) {
        let Some(round) = self.round.as_mut() else {
            self.screen = Screen::Menu;
            return;
        };

        if cmd == InputCommand::Restart {
            if let Err(e) = round.restart() {
                log::warn!("restart failed: {e}");
            }
            return;
        }

        if round.is_complete() {
            if matches!(
                cmd,
                InputCommand::Click { .. } | InputCommand::Select | InputCommand::Menu
            ) {
                self.back_to_menu();
            }
            return;
        }

        match cmd {
            InputCommand::Up | InputCommand::Down | InputCommand::Left | InputCommand::Right => {
                self.cursor.apply(cmd);
            }
            InputCommand::Select => {
                round.handle_select(self.cursor.index());
            }
            InputCommand::Click { x, y } => {
                round.snapshot_into(&mut self.snap);
                if let Some(i) = self.round_view.hit_test(&self.snap, viewport, x, y) {
                    self.cursor.set_index(i);
                    round.handle_select(i);
                }
            }
            InputCommand::Menu => self.back_to_menu(),
            _ => {}
        }
    }

    /// Advance the active round by one frame.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some(round) = self.round.as_mut() {
            round.advance(elapsed_ms);
        }
    }

    /// Fingerprint of the next frame and whether it is animating.
    pub fn frame_state(&mut self, viewport: Viewport) -> (u64, bool) {
        match (self.screen, self.round.as_ref()) {
            (Screen::Playing, Some(round)) => {
                round.snapshot_into(&mut self.snap);
                (
                    frame_fingerprint(&self.snap, Some(self.cursor.index()), viewport),
                    self.snap.animating(),
                )
            }
            _ => {
                let mut h = DefaultHasher::new();
                self.menu.hash(&mut h);
                self.last_error.hash(&mut h);
                viewport.hash(&mut h);
                (h.finish(), false)
            }
        }
    }

    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        match (self.screen, self.round.as_ref()) {
            (Screen::Playing, Some(round)) => {
                round.snapshot_into(&mut self.snap);
                self.round_view
                    .render_into(&self.snap, Some(self.cursor.index()), viewport, fb);
            }
            _ => {
                let status = self
                    .last_error
                    .as_ref()
                    .map(|e| format!("Cannot start: {e}"));
                self.menu_view
                    .render_into_with_status(&self.menu, status.as_deref(), viewport, fb);
            }
        }
    }
}
