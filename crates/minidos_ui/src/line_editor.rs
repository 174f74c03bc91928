//! Line input for the interactive loop
//!
//! [`HistoryReader`] gives arrow-key recall through rustyline when stdin is a
//! terminal. [`PlainReader`] reads bare lines from any `BufRead` and is what
//! piped input and `--no-history` get.

use is_terminal::IsTerminal;
use rustyline::config::{Config, EditMode};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::io::{self, BufRead, Write};

use crate::completion::VerbHelper;

/// One attempt to read a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line, without its terminator.
    Line(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    /// End of input.
    Closed,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome;

    /// Add an entered command to the recall history, if there is one.
    fn remember(&mut self, _line: &str) {}

    fn has_history(&self) -> bool {
        false
    }
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        (**self).read_line(prompt)
    }

    fn remember(&mut self, line: &str) {
        (**self).remember(line)
    }

    fn has_history(&self) -> bool {
        (**self).has_history()
    }
}

/// Line editor configuration
#[derive(Debug, Clone)]
pub struct LineEditorConfig {
    /// Use the history-capable editor when possible
    pub enabled: bool,
    /// Entries kept in memory
    pub history_size: usize,
    /// vi key bindings instead of emacs
    pub vi_mode: bool,
}

impl Default for LineEditorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            history_size: 1000,
            vi_mode: false,
        }
    }
}

/// rustyline-backed reader. History lives only as long as the process;
/// Tab completes command names from `vocabulary`.
pub struct HistoryReader {
    editor: Editor<VerbHelper, DefaultHistory>,
}

impl HistoryReader {
    pub fn new(
        config: &LineEditorConfig,
        vocabulary: impl IntoIterator<Item = &'static str>,
    ) -> rustyline::Result<Self> {
        let edit_mode = if config.vi_mode {
            EditMode::Vi
        } else {
            EditMode::Emacs
        };
        let rl_config = Config::builder()
            .max_history_size(config.history_size)?
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .auto_add_history(false)
            .edit_mode(edit_mode)
            .build();

        let mut editor = Editor::with_config(rl_config)?;
        editor.set_helper(Some(VerbHelper::new(vocabulary)));
        Ok(Self { editor })
    }
}

impl LineSource for HistoryReader {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        match self.editor.readline(prompt) {
            Ok(line) => ReadOutcome::Line(line),
            Err(ReadlineError::Interrupted) => ReadOutcome::Interrupted,
            Err(ReadlineError::Eof) => ReadOutcome::Closed,
            Err(err) => {
                tracing::warn!(error = %err, "line editor failed; closing input");
                ReadOutcome::Closed
            }
        }
    }

    fn remember(&mut self, line: &str) {
        if let Err(err) = self.editor.add_history_entry(line) {
            tracing::debug!(error = %err, "history entry dropped");
        }
    }

    fn has_history(&self) -> bool {
        true
    }
}

/// Prompt on `W`, read lines from `R`.
pub struct PlainReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlainReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl PlainReader<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineSource for PlainReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        if !prompt.is_empty() {
            let _ = self.output.write_all(prompt.as_bytes());
        }
        let _ = self.output.flush();

        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) => ReadOutcome::Closed,
            Ok(_) => {
                let trimmed = buf.strip_suffix('\n').unwrap_or(&buf);
                let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
                ReadOutcome::Line(trimmed.to_string())
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => ReadOutcome::Interrupted,
            Err(err) => {
                tracing::warn!(error = %err, "reading input failed; closing input");
                ReadOutcome::Closed
            }
        }
    }
}

/// Pick the best reader for this process: the history editor on an
/// interactive stdin, plain lines otherwise or when the editor cannot start.
pub fn open_reader(
    config: &LineEditorConfig,
    vocabulary: impl IntoIterator<Item = &'static str>,
) -> Box<dyn LineSource> {
    if config.enabled && io::stdin().is_terminal() {
        match HistoryReader::new(config, vocabulary) {
            Ok(reader) => return Box::new(reader),
            Err(err) => tracing::warn!(error = %err, "line editor unavailable"),
        }
    }
    Box::new(PlainReader::stdio())
}
