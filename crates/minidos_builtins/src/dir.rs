//! `dir` builtin: list the working directory, directories first.

use crate::common::BuiltinContext;
use minidos_core::{CommandError, CommandResult, Operation};
use minidos_hal::fs;

pub fn execute(_args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    let cwd = ctx.session.current_dir().to_path_buf();
    let listing =
        fs::list(&cwd).map_err(|e| CommandError::from_io(Operation::ListDirectory, e))?;

    let shown = cwd.display().to_string();
    ctx.say("");
    ctx.say(format!("Directory of {shown}"));
    ctx.say("-".repeat(shown.chars().count() + 15));

    if listing.is_empty() {
        ctx.say(" <EMPTY>");
        return Ok(());
    }

    for name in &listing.directories {
        ctx.say(format!("<DIR>  {name}"));
    }
    for file in &listing.files {
        match &file.size {
            Ok(size) => ctx.say(format!("       {} {size} bytes", file.name)),
            Err(_) => ctx.say(format!("       {} <ERROR: size unavailable>", file.name)),
        }
    }
    ctx.say("");
    Ok(())
}
