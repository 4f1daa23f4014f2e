//! TerminalRenderer: the only part of the crate that touches stdout.
//!
//! Each frame is compared with the one shown before it and only the changed
//! runs of cells are repainted. Style changes are emitted lazily, so a run of
//! same-styled text costs one color switch.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Rgb;

const BEL: u8 = 0x07;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
    bell: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(64 * 1024),
            bell: false,
        }
    }

    /// Raw mode, alternate screen and mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(event::EnableMouseCapture)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(event::DisableMouseCapture)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next frame (after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    pub fn queue_bell(&mut self) {
        self.bell = true;
    }

    /// Show `fb`, then hand back the previously shown buffer in its place.
    ///
    /// The caller keeps drawing into whatever buffer it gets back, so no
    /// frame is ever cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        let mut spare = match self.shown.take() {
            Some(shown) if same_size(&shown, fb) => {
                encode_diff_into(&shown, fb, &mut self.out)?;
                shown
            }
            Some(mut stale) => {
                encode_full_into(fb, &mut self.out)?;
                stale.resize(fb.width(), fb.height());
                stale
            }
            None => {
                encode_full_into(fb, &mut self.out)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        if std::mem::take(&mut self.bell) {
            self.out.push(BEL);
        }
        self.flush()?;

        std::mem::swap(&mut spare, fb);
        self.shown = Some(spare);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Clear the screen and paint every cell of `fb`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::new(out);
    for y in 0..fb.height() {
        pen.paint_run(fb, 0, y, fb.width())?;
    }
    pen.finish()
}

/// Paint only the cells of `next` that differ from `prev`.
///
/// Buffers of different sizes are treated as fully changed.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::new(out);
    if same_size(prev, next) {
        for (x, y, len) in ChangedRuns::new(prev, next) {
            pen.paint_run(next, x, y, len)?;
        }
    } else {
        for y in 0..next.height() {
            pen.paint_run(next, 0, y, next.width())?;
        }
    }
    pen.finish()
}

/// Writes cells while tracking the terminal's current style.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Pen<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn paint_run(&mut self, fb: &FrameBuffer, x: u16, y: u16, len: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for cx in x..x.saturating_add(len) {
            let cell = fb.get(cx, y).unwrap_or_default();
            self.set_style(cell.style)?;
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    /// Emit only the parts of `next` that differ from the current style.
    fn set_style(&mut self, next: CellStyle) -> Result<()> {
        let prev = self.style.replace(next);
        if prev == Some(next) {
            return Ok(());
        }
        if prev.map(|p| p.fg) != Some(next.fg) {
            self.out.queue(SetForegroundColor(truecolor(next.fg)))?;
        }
        if prev.map(|p| p.bg) != Some(next.bg) {
            self.out.queue(SetBackgroundColor(truecolor(next.bg)))?;
        }
        if prev.map(|p| (p.bold, p.dim)) != Some((next.bold, next.dim)) {
            // Bold and dim share one SGR reset.
            self.out.queue(SetAttribute(Attribute::NormalIntensity))?;
            if next.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if next.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn truecolor(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// `(x, y, len)` spans of differing cells, row by row. Both buffers must be
/// the same size.
struct ChangedRuns<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    x: u16,
    y: u16,
}

impl<'a> ChangedRuns<'a> {
    fn new(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> Self {
        Self {
            prev,
            next,
            x: 0,
            y: 0,
        }
    }

    fn differs(&self, x: u16) -> bool {
        self.prev.get(x, self.y) != self.next.get(x, self.y)
    }
}

impl Iterator for ChangedRuns<'_> {
    type Item = (u16, u16, u16);

    fn next(&mut self) -> Option<Self::Item> {
        let w = self.next.width();
        while self.y < self.next.height() {
            while self.x < w && !self.differs(self.x) {
                self.x += 1;
            }
            if self.x < w {
                let start = self.x;
                while self.x < w && self.differs(self.x) {
                    self.x += 1;
                }
                return Some((start, self.y, self.x - start));
            }
            self.x = 0;
            self.y += 1;
        }
        None
    }
}
