use minidos_core::{Console, Session};
use minidos_hal::Elevator;

/// Context for built-in command execution
pub struct BuiltinContext<'a> {
    /// Working-directory state, re-read from the OS on access
    pub session: &'a mut Session,

    /// Where output goes and where the overwrite confirmation comes from
    pub console: &'a mut dyn Console,

    /// Runs `sudo` command lines
    pub elevator: &'a mut dyn Elevator,
}

impl<'a> BuiltinContext<'a> {
    pub fn new(
        session: &'a mut Session,
        console: &'a mut dyn Console,
        elevator: &'a mut dyn Elevator,
    ) -> Self {
        Self {
            session,
            console,
            elevator,
        }
    }

    /// Print one formatted line.
    pub fn say(&mut self, line: impl AsRef<str>) {
        self.console.print(line.as_ref());
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}
