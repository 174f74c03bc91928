//! `cd` builtin command - change directory
//!
//! Changes the process working directory; the session re-reads it from the
//! OS afterwards. With no argument it only reports where we are.

use crate::common::BuiltinContext;
use crate::help::usage;
use minidos_core::{CommandError, CommandResult, Operation, Subject, Verb};
use minidos_hal::fs::{probe, EntryKind};
use std::path::Path;

pub fn execute(args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    let Some(target) = args.first() else {
        let cwd = ctx.session.current_dir().display().to_string();
        ctx.say(format!("Usage: {}", usage(Verb::Cd)));
        ctx.say(format!("Current directory: {cwd}"));
        return Ok(());
    };
    let op = || Operation::ChangeDirectory(target.clone());
    let path = Path::new(target);

    match probe(path).map_err(|e| CommandError::from_io(op(), e))? {
        None => return Err(CommandError::NotFound(Subject::Directory(target.clone()))),
        Some(EntryKind::Directory) => {}
        Some(_) => return Err(CommandError::NotADirectory(Subject::Entry(target.clone()))),
    }

    let cwd = ctx
        .session
        .change_directory(path)
        .map_err(|e| CommandError::from_io(op(), e))?
        .display()
        .to_string();
    ctx.say(format!("Current directory: {cwd}"));
    Ok(())
}
