//! MiniDOS Host Abstraction Layer (HAL)
//!
//! Isolates the two things the interpreter needs from the host: a view onto
//! the real filesystem and a way to run a command line through the OS
//! privilege-elevation program.

pub mod error;
pub mod fs;
pub mod process;

pub use error::{HalError, HalResult};
pub use fs::{EntryKind, FileEntry, Listing};
pub use process::{elevation_argv, Completion, Elevator, SystemElevator};
