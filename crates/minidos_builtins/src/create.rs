//! `create` builtin: make a new, empty regular file.

use crate::common::BuiltinContext;
use crate::help::usage;
use minidos_core::{CommandError, CommandResult, Operation, Subject, Verb};
use minidos_hal::fs::probe;
use std::fs::OpenOptions;
use std::io;

pub fn execute(args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    let name = args.first().ok_or(CommandError::Usage(usage(Verb::Create)))?;
    let path = ctx.session.resolve(name);
    let op = || Operation::CreateFile(name.clone());
    let exists = || CommandError::AlreadyExists(Subject::File(name.clone()), "");

    if probe(&path).map_err(|e| CommandError::from_io(op(), e))?.is_some() {
        return Err(exists());
    }

    // Fails if the name appeared after the probe.
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => exists(),
            _ => CommandError::from_io(op(), e),
        })?;

    ctx.say(format!("File '{name}' created."));
    Ok(())
}
