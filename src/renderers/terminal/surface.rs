use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::pipeline::CharBuffer;
use crate::renderers::DisplaySurface;

/// Writes frames as plain text rows into any `Write`.
///
/// Each present clears the screen, homes the cursor, then writes every row
/// followed by `newline`.
pub struct TermSurface<W: Write> {
    out: W,
    newline: &'static str,
    line: String,
}

impl<W: Write> TermSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            newline: "\n",
            line: String::new(),
        }
    }

    /// Raw mode turns off the implicit carriage return, so rows need `\r\n`
    pub fn raw(out: W) -> Self {
        Self {
            newline: "\r\n",
            ..Self::new(out)
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for TermSurface<W> {
    fn present(&mut self, buffer: &CharBuffer) -> io::Result<()> {
        self.out.queue(Clear(ClearType::All))?;
        self.out.queue(MoveTo(0, 0))?;

        // Build each row once and hand it over in a single write
        for row in buffer.rows() {
            self.line.clear();
            self.line.extend(row.iter());
            self.line.push_str(self.newline);
            self.out.write_all(self.line.as_bytes())?;
        }
        self.out.flush()
    }
}
