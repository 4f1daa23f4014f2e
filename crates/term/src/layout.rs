//! Screen geometry: where the board, HUD and menu land for a given terminal
//! size, and the inverse mapping from a clicked cell back to a card.

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rows reserved above the board (HUD line plus a spacer).
pub const HUD_ROWS: u16 = 2;
/// Rows reserved below the board (key hints).
pub const HINT_ROWS: u16 = 1;

const MAX_CARD_H: u16 = 5;

/// Terminal rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.w && y < self.y + self.h
    }
}

/// Placement of a `rows x cols` card grid inside a viewport.
///
/// Cards are roughly twice as wide as tall to compensate for terminal glyph
/// aspect, separated by one-cell gaps. The gaps carry the cursor brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub card_w: u16,
    pub card_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
    pub rows: u16,
    pub cols: u16,
}

impl BoardLayout {
    /// `None` when the viewport cannot fit one cell per card.
    pub fn compute(viewport: Viewport, rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        let rows = u16::try_from(rows).ok()?;
        let cols = u16::try_from(cols).ok()?;

        let avail_h = viewport.height.saturating_sub(HUD_ROWS + HINT_ROWS);
        // One column each side for the cursor brackets.
        let avail_w = viewport.width.saturating_sub(2);

        let pitch_y = avail_h / rows;
        if pitch_y == 0 {
            return None;
        }
        let gap_y = u16::from(pitch_y >= 2);
        let card_h = (pitch_y - gap_y).min(MAX_CARD_H);

        let gap_x = 1;
        let pitch_x = (avail_w + gap_x) / cols;
        if pitch_x <= gap_x {
            return None;
        }
        let card_w = (card_h * 2 + 2).min(pitch_x - gap_x);

        let total_w = cols * card_w + (cols - 1) * gap_x;
        let total_h = rows * card_h + (rows - 1) * gap_y;

        Some(Self {
            origin_x: 1 + avail_w.saturating_sub(total_w) / 2,
            origin_y: HUD_ROWS + avail_h.saturating_sub(total_h) / 2,
            card_w,
            card_h,
            gap_x,
            gap_y,
            rows,
            cols,
        })
    }

    pub fn card_rect(&self, row: u16, col: u16) -> Rect {
        Rect {
            x: self.origin_x + col * (self.card_w + self.gap_x),
            y: self.origin_y + row * (self.card_h + self.gap_y),
            w: self.card_w,
            h: self.card_h,
        }
    }

    /// Card index under terminal cell `(x, y)`. Gaps hit nothing.
    pub fn hit(&self, x: u16, y: u16) -> Option<usize> {
        let rel_x = x.checked_sub(self.origin_x)?;
        let rel_y = y.checked_sub(self.origin_y)?;
        let pitch_x = self.card_w + self.gap_x;
        let pitch_y = self.card_h + self.gap_y;

        let (col, in_x) = (rel_x / pitch_x, rel_x % pitch_x);
        let (row, in_y) = (rel_y / pitch_y, rel_y % pitch_y);
        if col >= self.cols || row >= self.rows || in_x >= self.card_w || in_y >= self.card_h {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }
}
