//! `type` builtin: show one file inside a labelled block.

use crate::common::BuiltinContext;
use crate::help::usage;
use minidos_core::{CommandError, CommandResult, Operation, Subject, Verb};
use minidos_hal::fs::{probe, EntryKind};
use std::fs;
use std::io;

pub fn execute(args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    let name = args.first().ok_or(CommandError::Usage(usage(Verb::Type)))?;
    let path = ctx.session.resolve(name);
    let op = || Operation::ReadFile(name.clone());
    let not_found = || CommandError::NotFound(Subject::File(name.clone()));

    match probe(&path).map_err(|e| CommandError::from_io(op(), e))? {
        None => return Err(not_found()),
        Some(EntryKind::Directory) => {
            return Err(CommandError::IsDirectory(Subject::Entry(name.clone()), ", not a file."))
        }
        Some(_) => {}
    }

    let bytes = fs::read(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => not_found(),
        _ => CommandError::from_io(op(), e),
    })?;

    ctx.say(format!("--- Content of {name} ---"));
    ctx.say(String::from_utf8_lossy(&bytes));
    ctx.say(format!("--- End of {name} ---"));
    Ok(())
}
