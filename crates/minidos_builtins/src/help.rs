//! `help` builtin and the usage table every handler reports from.
//!
//! Both functions below match exhaustively on [`Verb`], so a new verb does
//! not compile until it has a help line.

use crate::common::BuiltinContext;
use minidos_core::{CommandResult, Verb};

/// Usage string, shown by `help` and in `Usage: ...` diagnostics.
pub fn usage(verb: Verb) -> &'static str {
    match verb {
        Verb::Echo => "echo <text>",
        Verb::Dir => "dir",
        Verb::Create => "create <filename>",
        Verb::Type => "type <filename>",
        Verb::Cat => "cat <file1> [file2 ...]",
        Verb::Cls => "cls",
        Verb::Ren => "ren <old_name> <new_name>",
        Verb::Del => "del <filename_or_dirname>",
        Verb::Copy => "copy <source_filename> <destination_filename>",
        Verb::Cd => "cd <directory_path>",
        Verb::Mkdir => "mkdir <dirname>",
        Verb::Sudo => "sudo <command_to_run_with_root_privileges>",
        Verb::Help => "help",
        Verb::Exit => "exit",
    }
}

pub fn description(verb: Verb) -> &'static str {
    match verb {
        Verb::Echo => "Prints text to the console.",
        Verb::Dir => "Lists files and directories in the current OS directory.",
        Verb::Create => "Creates a new empty file in the current OS directory.",
        Verb::Type => "Displays the content of a single file from the current OS directory.",
        Verb::Cat => "Displays the content of one or more files.",
        Verb::Cls => "Clears the console screen.",
        Verb::Ren => "Renames a file or directory in the current OS directory.",
        Verb::Del => "Deletes a file or an empty directory from the current OS directory.",
        Verb::Copy => "Copies a file within the current OS directory.",
        Verb::Cd => "Changes the current working directory of the OS.",
        Verb::Mkdir => "Creates a new directory in the current OS directory.",
        Verb::Sudo => "Executes an external system command with root privileges.",
        Verb::Help => "Shows this help message.",
        Verb::Exit => "Quits MiniDOS.",
    }
}

pub fn execute(_args: &[String], ctx: &mut BuiltinContext<'_>) -> CommandResult<()> {
    let width = Verb::ALL.iter().map(|v| usage(*v).len()).max().unwrap_or(0);
    let program = ctx.elevator.program().to_string();

    ctx.say("Available commands:");
    for verb in Verb::ALL {
        ctx.say(format!("  {:<width$} - {}", usage(verb), description(verb)));
        if verb == Verb::Sudo {
            ctx.say(format!(
                "  {:<width$}   (You will be prompted for your password by the system's '{program}').",
                ""
            ));
        }
    }
    Ok(())
}
