//! MenuView: draws the main menu and resolves pointer positions to entries.

use crate::fb::{CellStyle, FrameBuffer};
use crate::input::{Menu, MenuItem};
use crate::layout::{Rect, Viewport};

const TITLE: &str = "Memory Game";
const BUTTON_W: u16 = 20;
/// Title row plus spacer above the first button.
const HEADER_ROWS: u16 = 2;
const BUTTON_PITCH: u16 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }

    fn top(&self, menu: &Menu, viewport: Viewport) -> u16 {
        let n = menu.items().len() as u16;
        let total = HEADER_ROWS + n * BUTTON_PITCH - 1;
        viewport.height.saturating_sub(total) / 2
    }

    pub fn button_rect(&self, menu: &Menu, viewport: Viewport, index: usize) -> Rect {
        Rect {
            x: viewport.width.saturating_sub(BUTTON_W) / 2,
            y: self.top(menu, viewport) + HEADER_ROWS + index as u16 * BUTTON_PITCH,
            w: BUTTON_W,
            h: 1,
        }
    }

    /// Entry under terminal cell `(x, y)`.
    pub fn hit_test(&self, menu: &Menu, viewport: Viewport, x: u16, y: u16) -> Option<usize> {
        (0..menu.items().len()).find(|&i| self.button_rect(menu, viewport, i).contains(x, y))
    }

    pub fn render_into(&self, menu: &Menu, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_status(menu, None, viewport, fb);
    }

    /// Render with an optional status line under the buttons (e.g. why the
    /// last start failed).
    pub fn render_into_with_status(
        &self,
        menu: &Menu,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let base = CellStyle::for_mode(menu.mode());
        fb.resize(viewport.width, viewport.height);
        fb.clear(base.into_cell(' '));

        let top = self.top(menu, viewport);
        let title_x = viewport.width.saturating_sub(TITLE.len() as u16) / 2;
        fb.put_str(title_x, top, TITLE, base.bold());

        for (i, item) in menu.items().iter().enumerate() {
            let rect = self.button_rect(menu, viewport, i);
            let style = if i == menu.focused() {
                base.inverted().bold()
            } else {
                base
            };
            fb.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', style);

            let label = item.label();
            let lx = rect.x + rect.w.saturating_sub(label.len() as u16) / 2;
            fb.put_str(lx, rect.y, label, style);

            if *item == MenuItem::Mode(menu.mode()) {
                fb.put_char(rect.x + 1, rect.y, '*', style);
            }
        }

        if let Some(msg) = status {
            let last = self.button_rect(menu, viewport, menu.items().len() - 1);
            let y = last.y + BUTTON_PITCH;
            let x = viewport.width.saturating_sub(msg.chars().count() as u16) / 2;
            fb.put_str(x, y, msg, base.bold());
        }
    }

    pub fn render(&self, menu: &Menu, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(menu, viewport, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DisplayMode;

    #[test]
    fn test_renders_all_entries() {
        let menu = Menu::new(DisplayMode::Dark);
        let vp = Viewport::new(80, 24);
        let fb = MenuView::new().render(&menu, vp);
        let text: String = (0..24).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n");
        let labels = [
            "Memory Game",
            "Easy (4x4)",
            "Medium (6x6)",
            "Hard (8x8)",
            "Light Mode",
            "Dark Mode",
            "Close",
        ];
        for label in labels {
            assert!(text.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_hit_test_each_button() {
        let menu = Menu::default();
        let view = MenuView::new();
        let vp = Viewport::new(80, 24);
        for i in 0..6 {
            let r = view.button_rect(&menu, vp, i);
            assert_eq!(view.hit_test(&menu, vp, r.x, r.y), Some(i));
            assert_eq!(view.hit_test(&menu, vp, r.x + r.w - 1, r.y), Some(i));
        }
        let first = view.button_rect(&menu, vp, 0);
        assert_eq!(view.hit_test(&menu, vp, first.x, first.y + 1), None);
        assert_eq!(view.hit_test(&menu, vp, 0, 0), None);
    }

    #[test]
    fn test_focus_is_highlighted() {
        let mut menu = Menu::new(DisplayMode::Light);
        menu.focus(2);
        let view = MenuView::new();
        let vp = Viewport::new(80, 24);
        let fb = view.render(&menu, vp);
        let r = view.button_rect(&menu, vp, 2);
        assert_eq!(fb.get(r.x, r.y).unwrap().style.bg, DisplayMode::Light.text());
        let r0 = view.button_rect(&menu, vp, 0);
        assert_eq!(fb.get(r0.x, r0.y).unwrap().style.bg, DisplayMode::Light.background());
    }

    #[test]
    fn test_status_line_below_buttons() {
        let menu = Menu::new(DisplayMode::Dark);
        let view = MenuView::new();
        let vp = Viewport::new(80, 24);
        let mut fb = FrameBuffer::new(80, 24);
        view.render_into_with_status(&menu, Some("Cannot start: palette too small"), vp, &mut fb);

        let last = view.button_rect(&menu, vp, 5);
        let row = fb.row_text(last.y + BUTTON_PITCH);
        assert!(row.contains("Cannot start: palette too small"), "{row:?}");
        assert!(fb.get(40, last.y + BUTTON_PITCH).unwrap().style.bold);

        let plain = view.render(&menu, vp);
        assert!(!plain.row_text(last.y + BUTTON_PITCH).contains("Cannot start"));
    }
}
