//! The interactive loop
//!
//! Prompt with the working directory, read a line, hand it to the builtins,
//! repeat until `exit` or end of input.

use crate::line_editor::{LineSource, ReadOutcome};
use crate::terminal::Terminal;
use minidos_builtins::{execute_line, BuiltinContext, Flow};
use minidos_core::{Console, Session, FAREWELL, PRODUCT};
use minidos_hal::Elevator;
use std::io::Write;

pub struct Repl<S, W> {
    session: Session,
    terminal: Terminal<S, W>,
    elevator: Box<dyn Elevator>,
}

impl<S: LineSource, W: Write> Repl<S, W> {
    pub fn new(session: Session, terminal: Terminal<S, W>, elevator: Box<dyn Elevator>) -> Self {
        Self {
            session,
            terminal,
            elevator,
        }
    }

    pub fn terminal(&self) -> &Terminal<S, W> {
        &self.terminal
    }

    /// Startup banner.
    pub fn greet(&mut self) {
        let cwd = self.session.current_dir().display().to_string();
        self.terminal.print(&format!(
            "{PRODUCT} v{}.{} - Real OS File System Access",
            env!("CARGO_PKG_VERSION_MAJOR"),
            env!("CARGO_PKG_VERSION_MINOR"),
        ));
        self.terminal.print(&format!("Starting in: {cwd}"));
        self.terminal.print("Type 'help' for available commands.");
        if self.terminal.has_history() {
            self.terminal.print("Command History (Up/Down arrow) ENABLED.");
        } else {
            self.terminal
                .print("Command history is unavailable; using plain line input.");
        }
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) {
        tracing::debug!("session started");
        loop {
            let prompt = self.session.prompt();
            let line = match self.terminal.source_mut().read_line(&prompt) {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Closed => {
                    // Ctrl-D after a prompt leaves the cursor mid-line.
                    self.terminal.print("");
                    self.terminal.print(FAREWELL);
                    break;
                }
            };

            if !line.trim().is_empty() {
                self.terminal.source_mut().remember(&line);
            }
            if self.run_line(&line) == Flow::Exit {
                break;
            }
        }
        tracing::debug!("session ended");
    }

    /// Execute one command line.
    pub fn run_line(&mut self, line: &str) -> Flow {
        let mut ctx = BuiltinContext::new(
            &mut self.session,
            &mut self.terminal,
            self.elevator.as_mut(),
        );
        execute_line(line, &mut ctx)
    }
}
