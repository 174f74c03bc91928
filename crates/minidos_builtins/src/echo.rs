//! `echo` builtin

use crate::common::BuiltinContext;
use minidos_core::CommandResult;

/// Print the arguments joined by single spaces. No arguments prints an
/// empty line.
pub fn execute(args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    ctx.say(args.join(" "));
    Ok(())
}
