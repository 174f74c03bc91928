//! `exit` builtin - end the session.
//!
//! Only prints the farewell; the dispatcher turns the verb into
//! [`Flow::Exit`](crate::Flow::Exit). Arguments are ignored and the process
//! exit code stays 0.

use crate::common::BuiltinContext;
use minidos_core::{CommandResult, FAREWELL};

pub fn execute(_args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    ctx.say(FAREWELL);
    Ok(())
}
