//! `del` builtin: remove a file or an empty directory. Never recurses.

use crate::common::BuiltinContext;
use crate::help::usage;
use minidos_core::{CommandError, CommandResult, Operation, Subject, Verb};
use minidos_hal::fs::{is_empty_dir, probe, EntryKind};
use std::fs;

pub fn execute(args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    let target = args.first().ok_or(CommandError::Usage(usage(Verb::Del)))?;
    let path = ctx.session.resolve(target);
    let op = || Operation::Delete(target.clone());

    match probe(&path).map_err(|e| CommandError::from_io(op(), e))? {
        None => Err(CommandError::NotFound(Subject::Entry(target.clone()))),
        Some(EntryKind::File) => {
            fs::remove_file(&path).map_err(|e| CommandError::from_io(op(), e))?;
            ctx.say(format!("File '{target}' deleted."));
            Ok(())
        }
        Some(EntryKind::Directory) => {
            if !is_empty_dir(&path).map_err(|e| CommandError::from_io(op(), e))? {
                return Err(CommandError::NotEmpty(Subject::Directory(target.clone())));
            }
            fs::remove_dir(&path).map_err(|e| CommandError::from_io(op(), e))?;
            ctx.say(format!("Directory '{target}' deleted."));
            Ok(())
        }
        Some(EntryKind::Other) => Err(CommandError::UnsupportedKind(Subject::Entry(target.clone()))),
    }
}
