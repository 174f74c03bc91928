//! Console abstraction
//!
//! Handlers never touch stdout directly. They write through a [`Console`],
//! which also carries the single synchronous reply a command may ask for
//! (the overwrite confirmation in `copy`).

use std::collections::VecDeque;

pub trait Console {
    /// Write one line of output.
    fn print(&mut self, line: &str);

    /// Write bytes verbatim, with no newline added.
    fn write_raw(&mut self, bytes: &[u8]);

    /// Wait for one line of user input. `None` means input has ended.
    fn read_reply(&mut self) -> Option<String>;

    /// Clear the visible console area.
    fn clear_screen(&mut self);
}

/// In-memory console: records everything written and answers replies from a
/// script.
#[derive(Debug, Default)]
pub struct Transcript {
    output: Vec<u8>,
    replies: VecDeque<String>,
    clears: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn push_reply(&mut self, reply: impl Into<String>) {
        self.replies.push_back(reply.into());
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_string).collect()
    }

    /// Return and forget everything written so far.
    pub fn take_output(&mut self) -> String {
        let out = self.output();
        self.output.clear();
        out
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Replies not yet consumed.
    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }
}

impl Console for Transcript {
    fn print(&mut self, line: &str) {
        self.output.extend_from_slice(line.as_bytes());
        self.output.push(b'\n');
    }

    fn write_raw(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
    }

    fn read_reply(&mut self) -> Option<String> {
        self.replies.pop_front()
    }

    fn clear_screen(&mut self) {
        self.clears += 1;
    }
}
