//! `mkdir` builtin: create one directory. Parents must already exist.

use crate::common::BuiltinContext;
use crate::help::usage;
use minidos_core::{CommandError, CommandResult, Operation, Subject, Verb};
use minidos_hal::fs::probe;
use std::fs;
use std::io;

pub fn execute(args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    let name = args.first().ok_or(CommandError::Usage(usage(Verb::Mkdir)))?;
    let path = ctx.session.resolve(name);
    let op = || Operation::MakeDirectory(name.clone());
    let exists = || CommandError::AlreadyExists(Subject::Entry(name.clone()), "");

    if probe(&path).map_err(|e| CommandError::from_io(op(), e))?.is_some() {
        return Err(exists());
    }

    fs::create_dir(&path).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => exists(),
        _ => CommandError::from_io(op(), e),
    })?;

    ctx.say(format!("Directory '{name}' created."));
    Ok(())
}
