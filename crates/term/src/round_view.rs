//! RoundView: maps a `RoundSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::{CardSnapshot, Face, RoundSnapshot};
use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::{BoardLayout, Rect, Viewport};
use crate::types::CARD_BACK;

const HINTS: &str = "arrows move  enter flip  r restart  m menu  q quit";

/// Terminal renderer for a round in progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundView;

impl RoundView {
    pub fn new() -> Self {
        Self
    }

    pub fn layout(&self, snap: &RoundSnapshot, viewport: Viewport) -> Option<BoardLayout> {
        BoardLayout::compute(viewport, snap.rows, snap.cols)
    }

    /// Card index under a mouse click, if any.
    pub fn hit_test(
        &self,
        snap: &RoundSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<usize> {
        self.layout(snap, viewport)?
            .hit(x, y)
            .filter(|&i| i < snap.cards.len())
    }

    /// Render into an existing framebuffer.
    ///
    /// `cursor` is the keyboard-focused card; it is hidden once the round is
    /// complete.
    pub fn render_into(
        &self,
        snap: &RoundSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let base = CellStyle::for_mode(snap.mode);
        fb.resize(viewport.width, viewport.height);
        fb.clear(base.into_cell(' '));

        self.draw_hud(fb, snap, base, viewport);
        fb.put_str(
            1,
            viewport.height.saturating_sub(1),
            HINTS,
            base.dim(),
        );

        let Some(layout) = self.layout(snap, viewport) else {
            fb.put_str(1, 2, "Terminal too small", base.bold());
            return;
        };

        for card in &snap.cards {
            let rect = layout.card_rect(card.row as u16, card.col as u16);
            draw_card(fb, card, rect, base);
        }

        if let Some(i) = cursor.filter(|_| !snap.complete) {
            if let Some(card) = snap.cards.get(i) {
                let rect = layout.card_rect(card.row as u16, card.col as u16);
                let mid = rect.y + rect.h / 2;
                let style = base.bold();
                fb.put_char(rect.x.saturating_sub(1), mid, '[', style);
                fb.put_char(rect.x + rect.w, mid, ']', style);
            }
        }

        if snap.complete {
            self.draw_complete_overlay(fb, snap, base, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &RoundSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot,
        base: CellStyle,
        viewport: Viewport,
    ) {
        let label = base.bold();
        let mut x = fb.put_str(1, 0, "Score: ", label);
        x = fb.put_i32(x, 0, snap.score, base);
        x = fb.put_str(x + 3, 0, "Moves: ", label);
        x = fb.put_u32(x, 0, snap.moves, base);
        x = fb.put_str(x + 3, 0, "Time: ", label);
        x = fb.put_u64(x, 0, snap.elapsed_secs(), base);
        fb.put_char(x, 0, 's', base);

        let grid = snap.grid.label();
        let gx = viewport.width.saturating_sub(grid.len() as u16 + 1);
        if gx > x + 2 {
            fb.put_str(gx, 0, grid, base.dim());
        }
    }

    fn draw_complete_overlay(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot,
        base: CellStyle,
        viewport: Viewport,
    ) {
        let panel = base.inverted();
        let w = 30u16.min(viewport.width);
        let h = 7u16.min(viewport.height);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;
        fb.fill_rect(x, y, w, h, ' ', panel);

        centered(fb, x, w, y + 1, "Round Complete!", panel.bold());

        let mut cx = fb.put_str(x + 2, y + 3, "Score: ", panel);
        cx = fb.put_i32(cx, y + 3, snap.score, panel.bold());
        cx = fb.put_str(cx + 3, y + 3, "Moves: ", panel);
        fb.put_u32(cx, y + 3, snap.moves, panel.bold());

        cx = fb.put_str(x + 2, y + 4, "Accuracy: ", panel);
        cx = fb.put_u32(cx, y + 4, snap.accuracy_pct as u32, panel.bold());
        fb.put_char(cx, y + 4, '%', panel.bold());
        cx = fb.put_str(cx + 4, y + 4, "Time: ", panel);
        cx = fb.put_u64(cx, y + 4, snap.elapsed_secs(), panel.bold());
        fb.put_char(cx, y + 4, 's', panel.bold());

        centered(fb, x, w, y + 5, "Click to Return to Menu", panel.dim());
    }
}

fn draw_card(fb: &mut FrameBuffer, card: &CardSnapshot, rect: Rect, base: CellStyle) {
    let color = match card.shown {
        Face::Up => card.color,
        Face::Down => CARD_BACK,
    };
    let w = scaled_width(rect.w, card.width_permille);
    if w == 0 {
        return;
    }
    let x = rect.x + (rect.w - w) / 2;
    fb.fill_rect(x, rect.y, w, rect.h, ' ', CellStyle::new(base.fg, color));
}

/// Drawn width for a card squeezed to `permille` of full width. Never
/// collapses a visible card to nothing.
fn scaled_width(full: u16, permille: u16) -> u16 {
    if permille == 0 {
        return 0;
    }
    let w = (full as u32 * permille.min(1000) as u32 + 500) / 1000;
    (w as u16).clamp(1, full)
}

fn centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let len = text.chars().count() as u16;
    fb.put_str(x + w.saturating_sub(len) / 2, y, text, style);
}

/// Hash of everything that changes what a round frame looks like.
///
/// Time is folded to whole seconds, the HUD resolution.
pub fn frame_fingerprint(snap: &RoundSnapshot, cursor: Option<usize>, viewport: Viewport) -> u64 {
    let mut h = DefaultHasher::new();
    snap.round_id.hash(&mut h);
    snap.mode.hash(&mut h);
    snap.cards.hash(&mut h);
    snap.score.hash(&mut h);
    snap.moves.hash(&mut h);
    snap.elapsed_secs().hash(&mut h);
    snap.complete.hash(&mut h);
    cursor.hash(&mut h);
    viewport.hash(&mut h);
    h.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Round, RoundConfig};
    use crate::types::{DisplayMode, GridSize, CLASSIC_PALETTE, TICK_MS};

    fn small_round(mode: DisplayMode) -> Round {
        let config = RoundConfig::new(GridSize::Small, mode);
        let mut colors = Vec::new();
        for c in &CLASSIC_PALETTE[..8] {
            colors.push(*c);
            colors.push(*c);
        }
        let board = Board::from_colors(4, 4, colors).unwrap();
        Round::from_board(config, board).unwrap()
    }

    fn find_color(fb: &FrameBuffer, color: crate::types::Rgb) -> bool {
        fb.cells().iter().any(|c| c.style.bg == color)
    }

    #[test]
    fn test_face_down_board_shows_backs_only() {
        let round = small_round(DisplayMode::Dark);
        let snap = round.snapshot();
        let fb = RoundView::new().render(&snap, Some(0), Viewport::new(80, 24));
        assert!(find_color(&fb, CARD_BACK));
        assert!(!find_color(&fb, CLASSIC_PALETTE[0]));
        assert!(fb.row_text(0).contains("Score: 0"));
        assert!(fb.row_text(0).contains("Moves: 0"));
    }

    #[test]
    fn test_revealed_card_shows_color() {
        let mut round = small_round(DisplayMode::Light);
        assert!(round.handle_select(0));
        for _ in 0..10 {
            round.advance(TICK_MS);
        }
        let fb = RoundView::new().render(&round.snapshot(), None, Viewport::new(80, 24));
        assert!(find_color(&fb, CLASSIC_PALETTE[0]));
        assert_eq!(fb.get(0, 0).unwrap().style.bg, DisplayMode::Light.background());
    }

    #[test]
    fn test_hit_test_matches_layout() {
        let round = small_round(DisplayMode::Dark);
        let snap = round.snapshot();
        let view = RoundView::new();
        let vp = Viewport::new(80, 24);
        let layout = view.layout(&snap, vp).unwrap();
        let r = layout.card_rect(2, 3);
        assert_eq!(view.hit_test(&snap, vp, r.x + 1, r.y), Some(11));
        assert_eq!(view.hit_test(&snap, vp, 0, 0), None);
    }

    #[test]
    fn test_complete_overlay() {
        let mut round = small_round(DisplayMode::Dark);
        for pair in 0..8 {
            assert!(round.handle_select(pair * 2));
            assert!(round.handle_select(pair * 2 + 1));
            for _ in 0..10 {
                round.advance(TICK_MS);
            }
        }
        let snap = round.snapshot();
        assert!(snap.complete);
        let fb = RoundView::new().render(&snap, Some(0), Viewport::new(80, 24));
        let text: String = (0..24).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n");
        assert!(text.contains("Round Complete!"));
        assert!(text.contains("Accuracy: 100%"));
        assert!(text.contains("Click to Return to Menu"));
        assert!(!text.contains('['));
    }

    #[test]
    fn test_too_small_message() {
        let snap = small_round(DisplayMode::Dark).snapshot();
        let fb = RoundView::new().render(&snap, None, Viewport::new(40, 4));
        assert!(fb.row_text(2).starts_with(" Terminal too small"));
    }

    #[test]
    fn test_scaled_width() {
        assert_eq!(scaled_width(10, 1000), 10);
        assert_eq!(scaled_width(10, 500), 5);
        assert_eq!(scaled_width(10, 1), 1);
        assert_eq!(scaled_width(10, 0), 0);
    }

    #[test]
    fn test_fingerprint_ignores_sub_second_time() {
        let mut round = small_round(DisplayMode::Dark);
        let vp = Viewport::new(80, 24);
        let a = frame_fingerprint(&round.snapshot(), Some(0), vp);
        round.advance(TICK_MS);
        let b = frame_fingerprint(&round.snapshot(), Some(0), vp);
        assert_eq!(a, b);
        assert_ne!(a, frame_fingerprint(&round.snapshot(), Some(1), vp));
        round.advance(1000);
        assert_ne!(a, frame_fingerprint(&round.snapshot(), Some(0), vp));
    }
}
