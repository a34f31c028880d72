//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame and any frame after a resize are full redraws. Every other
//! frame only rewrites the runs of cells that changed, keeping slide animation
//! cheap at one frame per tick.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
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
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. The renderer
    /// diffs against the previous frame and then swaps buffers so the caller
    /// reuses the old allocation.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame(self.last.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        let mut prev = self
            .last
            .take()
            .filter(|prev| same_size(prev, fb))
            .unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    (a.width(), a.height()) == (b.width(), b.height())
}

/// Encode `next` as terminal commands into `out`.
///
/// Only cells that differ from `prev` are written. Without a previous frame of
/// the same size the screen is cleared and every cell is written.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|prev| same_size(prev, next));
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen: Option<CellStyle> = None;
    for y in 0..next.height() {
        let mut from = 0;
        while let Some((start, len)) = dirty_run(prev, next, y, from) {
            out.queue(cursor::MoveTo(start, y))?;
            for x in start..start + len {
                let cell = next.get(x, y).unwrap_or_default();
                if pen != Some(cell.style) {
                    apply_style_into(out, cell.style)?;
                    pen = Some(cell.style);
                }
                out.queue(Print(cell.ch))?;
            }
            from = start + len;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(ResetColor)?;
    Ok(())
}

/// Next run `(x, len)` of dirty cells on row `y` at or after column `from`.
fn dirty_run(prev: Option<&FrameBuffer>, next: &FrameBuffer, y: u16, from: u16) -> Option<(u16, u16)> {
    let w = next.width();
    let dirty = |x: u16| prev.map_or(true, |prev| prev.get(x, y) != next.get(x, y));
    let start = (from..w).find(|&x| dirty(x))?;
    let end = (start..w).find(|&x| !dirty(x)).unwrap_or(w);
    Some((start, end - start))
}

// SGR reset clears colors too, so it goes first.
fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetColors(Colors::new(style.fg.into(), style.bg.into())))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}
