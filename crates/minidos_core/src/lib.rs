//! MiniDOS Core Library
//!
//! Session state, the verb vocabulary, the line parser, the command error
//! taxonomy and the console abstraction shared by the handlers and the
//! interactive loop.

pub use console::{Console, Transcript};
pub use error::{CommandError, CommandResult, Operation, Subject};
pub use parser::{parse_line, Invocation};
pub use session::Session;
pub use verb::{UnknownVerb, Verb};

pub mod console;
pub mod error;
pub mod logging;
pub mod parser;
pub mod session;
pub mod verb;

/// Product name shown in the banner and farewell.
pub const PRODUCT: &str = "MiniDOS";

/// Printed when the session ends, by `exit` or by end of input.
pub const FAREWELL: &str = "Exiting MiniDOS. Goodbye!";
