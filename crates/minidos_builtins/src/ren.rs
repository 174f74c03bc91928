//! `ren` builtin: rename without ever overwriting.

use crate::common::BuiltinContext;
use crate::help::usage;
use minidos_core::{CommandError, CommandResult, Operation, Subject, Verb};
use minidos_hal::fs::probe;
use std::fs;

pub fn execute(args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    let (old, new) = match args {
        [old, new, ..] => (old, new),
        _ => return Err(CommandError::Usage(usage(Verb::Ren))),
    };
    let from = ctx.session.resolve(old);
    let to = ctx.session.resolve(new);
    let op = || Operation::Rename {
        from: old.clone(),
        to: new.clone(),
    };

    if probe(&from).map_err(|e| CommandError::from_io(op(), e))?.is_none() {
        return Err(CommandError::NotFound(Subject::Entry(old.clone())));
    }
    // A dangling link at the target counts as taken.
    if fs::symlink_metadata(&to).is_ok() {
        return Err(CommandError::AlreadyExists(
            Subject::Entry(new.clone()),
            " Cannot rename.",
        ));
    }

    fs::rename(&from, &to).map_err(|e| CommandError::from_io(op(), e))?;
    ctx.say(format!("'{old}' renamed to '{new}'."));
    Ok(())
}
