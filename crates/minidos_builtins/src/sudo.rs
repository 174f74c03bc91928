//! `sudo` builtin - privilege escalation wrapper.
//!
//! Delegates to the system elevation program (`sudo`, or `runas` on
//! Windows). The child shares our terminal so its password prompt reaches
//! the user; we block until it exits and report how it went. No retries,
//! no credential caching.

use crate::common::BuiltinContext;
use crate::help::usage;
use minidos_core::{CommandError, CommandResult, Verb};
use minidos_hal::{elevation_argv, Completion, HalError};

pub fn execute(args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    if args.is_empty() {
        return Err(CommandError::Usage(usage(Verb::Sudo)));
    }

    let program = ctx.elevator.program().to_string();
    let argv = elevation_argv(&program, args);
    let command = argv.join(" ");

    ctx.say(format!("Attempting to execute: {command}"));
    ctx.say(format!(
        "You may be prompted for your password by the system's '{program}'."
    ));

    match ctx.elevator.run(&argv) {
        Ok(done) if done.success() => {
            ctx.say(format!("Command '{command}' executed successfully."));
            Ok(())
        }
        Ok(Completion::Exited(code)) => {
            tracing::warn!(%command, code, "elevated command failed");
            Err(CommandError::ExitCode { command, code })
        }
        Ok(Completion::Signaled) => Err(CommandError::Terminated(command)),
        Err(HalError::ProgramNotFound(program)) => Err(CommandError::ProgramNotFound(program)),
        Err(HalError::Launch { program, source }) => Err(CommandError::Launch { program, source }),
    }
}
