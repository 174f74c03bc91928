//! `cat` builtin: concatenate files to the console.
//!
//! Usage: cat FILE...
//! Contents are written byte for byte with nothing between or after them.
//! A bad argument gets its own `cat: NAME: reason` line and the remaining
//! arguments are still processed.

use crate::common::BuiltinContext;
use crate::help::usage;
use minidos_core::{CommandError, CommandResult, Verb};
use minidos_hal::fs::{probe, EntryKind};
use std::fs;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
enum CatFault {
    #[error("No such file or directory")]
    Missing,
    #[error("Is a directory")]
    Directory,
    #[error("Permission denied")]
    Denied,
    #[error("Error reading file: {0}")]
    Read(io::Error),
}

impl From<io::Error> for CatFault {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => CatFault::Missing,
            io::ErrorKind::PermissionDenied => CatFault::Denied,
            _ => CatFault::Read(err),
        }
    }
}

pub fn execute(args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    if args.is_empty() {
        return Err(CommandError::Usage(usage(Verb::Cat)));
    }

    for name in args {
        match read_one(name, ctx) {
            Ok(bytes) => ctx.console.write_raw(&bytes),
            Err(fault) => {
                tracing::debug!(file = %name, %fault, "cat skipped file");
                ctx.say(format!("cat: {name}: {fault}"));
            }
        }
    }
    Ok(())
}

fn read_one(name: &str, ctx: &mut BuiltinContext<'_>) -> Result<Vec<u8>, CatFault> {
    let path = ctx.session.resolve(name);
    match probe(&path)? {
        None => Err(CatFault::Missing),
        Some(EntryKind::Directory) => Err(CatFault::Directory),
        Some(_) => Ok(fs::read(&path)?),
    }
}
