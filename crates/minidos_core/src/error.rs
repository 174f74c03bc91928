//! Error taxonomy for MiniDOS commands
//!
//! Every failure a handler can hit is one [`CommandError`] variant, and the
//! variant's `Display` is the exact diagnostic line shown to the user. The
//! dispatcher prints it and the session carries on; nothing here is fatal.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type for command handlers
pub type CommandResult<T> = Result<T, CommandError>;

/// The thing a diagnostic is about, rendered the way the message needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// `File 'name'`
    File(String),
    /// `Directory 'name'`
    Directory(String),
    /// `'name'`
    Entry(String),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::File(name) => write!(f, "File '{name}'"),
            Subject::Directory(name) => write!(f, "Directory '{name}'"),
            Subject::Entry(name) => write!(f, "'{name}'"),
        }
    }
}

/// A filesystem action, used to word permission and OS failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateFile(String),
    ReadFile(String),
    Rename { from: String, to: String },
    Delete(String),
    Copy { from: String, to: String },
    ChangeDirectory(String),
    MakeDirectory(String),
    ListDirectory,
}

impl Operation {
    /// Gerund form: `renaming 'a' to 'b'`.
    pub fn progressive(&self) -> String {
        match self {
            Operation::CreateFile(name) => format!("creating file '{name}'"),
            Operation::ReadFile(name) => format!("reading file '{name}'"),
            Operation::Rename { from, to } => format!("renaming '{from}' to '{to}'"),
            Operation::Delete(name) => format!("deleting '{name}'"),
            Operation::Copy { from, to } => format!("copying '{from}' to '{to}'"),
            Operation::ChangeDirectory(path) => format!("changing directory to '{path}'"),
            Operation::MakeDirectory(name) => format!("creating directory '{name}'"),
            Operation::ListDirectory => "accessing directory".to_string(),
        }
    }
}

/// Infinitive form: `rename 'a'`.
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::CreateFile(name) => write!(f, "create file '{name}'"),
            Operation::ReadFile(name) => write!(f, "read file '{name}'"),
            Operation::Rename { from, .. } => write!(f, "rename '{from}'"),
            Operation::Delete(name) => write!(f, "delete '{name}'"),
            Operation::Copy { from, to } => write!(f, "copy '{from}' to '{to}'"),
            Operation::ChangeDirectory(path) => write!(f, "change to '{path}'"),
            Operation::MakeDirectory(name) => write!(f, "create directory '{name}'"),
            Operation::ListDirectory => write!(f, "access this directory"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    /// Missing required argument(s).
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0} not found.")]
    NotFound(Subject),

    /// The name is taken; the second field is an optional trailing remark.
    #[error("{0} already exists.{1}")]
    AlreadyExists(Subject, &'static str),

    /// Found a directory where a file was needed.
    #[error("{0} is a directory{1}")]
    IsDirectory(Subject, &'static str),

    #[error("{0} is not a directory.")]
    NotADirectory(Subject),

    /// Copy source missing or not a regular file.
    #[error("{0} not found or is not a file.")]
    NotAFile(Subject),

    /// Neither a regular file nor a directory.
    #[error("{0} is not a file or an empty directory.")]
    UnsupportedKind(Subject),

    #[error("{0} is not empty. Cannot delete non-empty directory.")]
    NotEmpty(Subject),

    /// The user answered anything but yes to an overwrite prompt.
    #[error("Copy aborted.")]
    Aborted,

    #[error("Error: Permission denied to {0}.")]
    PermissionDenied(Operation),

    #[error("Error {}: {}", .0.progressive(), .1)]
    Os(Operation, #[source] io::Error),

    #[error("Error: The command '{0}' was not found in your system's PATH.")]
    ProgramNotFound(String),

    #[error("Command '{command}' failed with exit code {code}.")]
    ExitCode { command: String, code: i32 },

    #[error("Command '{0}' was terminated by a signal.")]
    Terminated(String),

    #[error("An unexpected error occurred during {program} command execution: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl CommandError {
    /// Translate an OS failure while performing `op`.
    pub fn from_io(op: Operation, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            CommandError::PermissionDenied(op)
        } else {
            CommandError::Os(op, err)
        }
    }

    /// `true` for failures caused by the OS rather than by the user's input.
    pub fn is_os_failure(&self) -> bool {
        matches!(
            self,
            CommandError::PermissionDenied(_) | CommandError::Os(..) | CommandError::Launch { .. }
        )
    }
}
