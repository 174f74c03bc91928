//! Built-in commands and the dispatcher that routes verbs to them.

pub mod common;

pub use common::{BuiltinContext, Flow};

pub mod help;

pub use help::execute as help_builtin;

pub mod echo;

pub use echo::execute as echo_builtin;

pub mod dir;

pub use dir::execute as dir_builtin;

pub mod create;
pub mod r#type;
pub mod cat;

pub use create::execute as create_builtin;
pub use r#type::execute as type_builtin;
pub use cat::execute as cat_builtin;

pub mod cls;

pub use cls::execute as cls_builtin;

pub mod ren;
pub mod del;
pub mod copy;

pub use ren::execute as ren_builtin;
pub use del::execute as del_builtin;
pub use copy::execute as copy_builtin;

pub mod cd;
pub mod mkdir;

pub use cd::execute as cd_builtin;
pub use mkdir::execute as mkdir_builtin;

pub mod sudo;

pub use sudo::execute as sudo_builtin;

pub mod exit;

pub use exit::execute as exit_builtin;

use minidos_core::{parse_line, CommandError, Verb};

/// Run the handler for `verb`. Handler failures are printed here as one
/// diagnostic line and never reach the caller.
pub fn dispatch(verb: Verb, args: &[String], ctx: &mut BuiltinContext<'_>) -> Flow {
    tracing::debug!(%verb, argc = args.len(), "dispatch");

    let result = match verb {
        Verb::Echo => echo_builtin(args, ctx),
        Verb::Dir => dir_builtin(args, ctx),
        Verb::Create => create_builtin(args, ctx),
        Verb::Type => type_builtin(args, ctx),
        Verb::Cat => cat_builtin(args, ctx),
        Verb::Cls => cls_builtin(args, ctx),
        Verb::Ren => ren_builtin(args, ctx),
        Verb::Del => del_builtin(args, ctx),
        Verb::Copy => copy_builtin(args, ctx),
        Verb::Cd => cd_builtin(args, ctx),
        Verb::Mkdir => mkdir_builtin(args, ctx),
        Verb::Sudo => sudo_builtin(args, ctx),
        Verb::Help => help_builtin(args, ctx),
        Verb::Exit => exit_builtin(args, ctx),
    };

    if let Err(err) = result {
        report(verb, &err, ctx);
    }

    match verb {
        Verb::Exit => Flow::Exit,
        _ => Flow::Continue,
    }
}

/// Parse and run one input line. Blank lines do nothing; unknown verbs get a
/// diagnostic.
pub fn execute_line(line: &str, ctx: &mut BuiltinContext<'_>) -> Flow {
    let Some(invocation) = parse_line(line) else {
        return Flow::Continue;
    };
    match invocation.resolve() {
        Ok(verb) => dispatch(verb, &invocation.args, ctx),
        Err(unknown) => {
            tracing::debug!(token = %unknown.0, "unknown verb");
            ctx.say(unknown.to_string());
            Flow::Continue
        }
    }
}

fn report(verb: Verb, err: &CommandError, ctx: &mut BuiltinContext<'_>) {
    if err.is_os_failure() {
        tracing::warn!(%verb, error = ?err, "command failed");
    } else {
        tracing::debug!(%verb, %err, "command rejected");
    }
    ctx.say(err.to_string());
}
