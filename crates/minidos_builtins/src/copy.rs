//! `copy` builtin: byte-for-byte file copy.
//!
//! Overwriting an existing file takes exactly one confirmation round trip
//! through the console. Only `y`/`Y` proceeds; anything else, including end
//! of input, leaves the destination untouched.

use crate::common::BuiltinContext;
use crate::help::usage;
use minidos_core::{CommandError, CommandResult, Operation, Subject, Verb};
use minidos_hal::fs::{probe, same_file, EntryKind};
use std::fs::File;
use std::io;
use std::path::Path;

pub fn execute(args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    let (source, destination) = match args {
        [source, destination, ..] => (source, destination),
        _ => return Err(CommandError::Usage(usage(Verb::Copy))),
    };
    let src = ctx.session.resolve(source);
    let dst = ctx.session.resolve(destination);
    let op = || Operation::Copy {
        from: source.clone(),
        to: destination.clone(),
    };

    if probe(&src).map_err(|e| CommandError::from_io(op(), e))? != Some(EntryKind::File) {
        return Err(CommandError::NotAFile(Subject::File(source.clone())));
    }

    match probe(&dst).map_err(|e| CommandError::from_io(op(), e))? {
        None => {}
        Some(EntryKind::Directory) => {
            return Err(CommandError::IsDirectory(
                Subject::Entry(destination.clone()),
                ". Cannot overwrite directory with file.",
            ));
        }
        Some(_) => {
            ctx.say(format!("File '{destination}' already exists. Overwrite? (Y/N)"));
            if !confirmed(ctx.console.read_reply()) {
                return Err(CommandError::Aborted);
            }
        }
    }

    copy_bytes(&src, &dst).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound if !src.exists() => {
            CommandError::NotAFile(Subject::File(source.clone()))
        }
        _ => CommandError::from_io(op(), e),
    })?;

    ctx.say(format!("File '{source}' copied to '{destination}'."));
    Ok(())
}

fn confirmed(reply: Option<String>) -> bool {
    reply.is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y"))
}

/// Copy contents only; permissions and timestamps of `dst` are its own.
fn copy_bytes(src: &Path, dst: &Path) -> io::Result<u64> {
    // Checked before `dst` is truncated; a hard link shares the source's data.
    if dst.exists() && same_file(src, dst)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        ));
    }
    let mut reader = File::open(src)?;
    let mut writer = File::create(dst)?;
    let copied = io::copy(&mut reader, &mut writer)?;
    writer.sync_all()?;
    Ok(copied)
}
