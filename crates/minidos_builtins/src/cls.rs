//! `cls` builtin - Clear the terminal screen
//!
//! The console decides how; on a real terminal that is an ANSI clear plus
//! cursor home.

use crate::common::BuiltinContext;
use minidos_core::CommandResult;

pub fn execute(_args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    ctx.console.clear_screen();
    Ok(())
}
