//! TerminalRenderer: flushes cell repaints to a real terminal.
//!
//! The drawing API is intentionally tiny: clear, paint cells, write a line of
//! text. Commands are queued into a byte buffer and written in one go.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::game_view::Paint;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
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

    /// Blank the whole screen.
    pub fn clear(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()
    }

    /// Repaint the given cells.
    pub fn paint(&mut self, paints: &[Paint]) -> Result<()> {
        self.buf.clear();
        encode_paints_into(paints, &mut self.buf)?;
        self.flush_buf()
    }

    /// Write `text` at the start of row `y`, clearing the rest of the line.
    pub fn text_line(&mut self, y: u16, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, y))?;
        self.buf
            .queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode cell repaints into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_paints_into(paints: &[Paint], out: &mut Vec<u8>) -> Result<()> {
    for paint in paints {
        out.queue(cursor::MoveTo(paint.x, paint.y))?;
        out.queue(Print(paint.glyph.ch()))?;
    }
    Ok(())
}
