//! stdout console
//!
//! Output is flushed after every write so a confirmation question is on
//! screen before the reply is read.

use crate::line_editor::{LineSource, ReadOutcome};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use is_terminal::IsTerminal;
use minidos_core::Console;
use std::io::{self, Write};

pub struct Terminal<S, W = io::Stdout> {
    source: S,
    out: W,
    ansi: bool,
}

impl<S: LineSource> Terminal<S> {
    /// Console on the process's stdout. Screen clearing only happens when
    /// stdout is a terminal.
    pub fn stdout(source: S) -> Self {
        let ansi = io::stdout().is_terminal();
        Self::new(source, io::stdout(), ansi)
    }
}

impl<S: LineSource, W: Write> Terminal<S, W> {
    pub fn new(source: S, out: W, ansi: bool) -> Self {
        Self { source, out, ansi }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn has_history(&self) -> bool {
        self.source.has_history()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn emit(&mut self, bytes: &[u8]) {
        let result = self.out.write_all(bytes).and_then(|()| self.out.flush());
        if let Err(err) = result {
            tracing::debug!(error = %err, "console write failed");
        }
    }
}

impl<S: LineSource, W: Write> Console for Terminal<S, W> {
    fn print(&mut self, line: &str) {
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');
        self.emit(&buf);
    }

    fn write_raw(&mut self, bytes: &[u8]) {
        self.emit(bytes);
    }

    /// Replies share the command line source but never enter history.
    fn read_reply(&mut self) -> Option<String> {
        match self.source.read_line("") {
            ReadOutcome::Line(line) => Some(line),
            ReadOutcome::Interrupted | ReadOutcome::Closed => None,
        }
    }

    fn clear_screen(&mut self) {
        if !self.ansi {
            return;
        }
        if let Err(err) = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)) {
            tracing::debug!(error = %err, "clear screen failed");
        }
    }
}
