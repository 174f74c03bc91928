//! The closed set of MiniDOS commands.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verb {
    Echo,
    Dir,
    Create,
    Type,
    Cat,
    Cls,
    Ren,
    Del,
    Copy,
    Cd,
    Mkdir,
    Sudo,
    Help,
    Exit,
}

/// A token that names no command. Holds the normalised (lowercased) token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown command: '{0}'")]
pub struct UnknownVerb(pub String);

impl Verb {
    /// Every verb, in the order `help` presents them.
    pub const ALL: [Verb; 14] = [
        Verb::Echo,
        Verb::Dir,
        Verb::Create,
        Verb::Type,
        Verb::Cat,
        Verb::Cls,
        Verb::Ren,
        Verb::Del,
        Verb::Copy,
        Verb::Cd,
        Verb::Mkdir,
        Verb::Sudo,
        Verb::Help,
        Verb::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Verb::Echo => "echo",
            Verb::Dir => "dir",
            Verb::Create => "create",
            Verb::Type => "type",
            Verb::Cat => "cat",
            Verb::Cls => "cls",
            Verb::Ren => "ren",
            Verb::Del => "del",
            Verb::Copy => "copy",
            Verb::Cd => "cd",
            Verb::Mkdir => "mkdir",
            Verb::Sudo => "sudo",
            Verb::Help => "help",
            Verb::Exit => "exit",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Verb {
    type Err = UnknownVerb;

    /// Case-insensitive.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let lowered = token.to_lowercase();
        Verb::ALL
            .iter()
            .copied()
            .find(|verb| verb.name() == lowered)
            .ok_or(UnknownVerb(lowered))
    }
}
