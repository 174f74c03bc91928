//! Privilege elevation through an external program
//!
//! The elevation program (normally `sudo`) owns authentication. We hand it
//! the terminal by letting the child inherit all three standard streams and
//! block until it exits.

use crate::error::{HalError, HalResult};
use std::process::{Command, Stdio};
use which::which;

/// How an elevated child finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Exited(i32),
    /// Killed by a signal; there is no exit code to report.
    Signaled,
}

impl Completion {
    pub fn success(&self) -> bool {
        matches!(self, Completion::Exited(0))
    }
}

/// Runs a command line with elevated rights.
pub trait Elevator {
    /// Name of the elevation program placed at the front of every vector.
    fn program(&self) -> &str;

    /// Run `argv` (program first) to completion.
    fn run(&mut self, argv: &[String]) -> HalResult<Completion>;
}

/// Build the literal vector `[program, tokens...]`.
pub fn elevation_argv(program: &str, tokens: &[String]) -> Vec<String> {
    let mut argv = Vec::with_capacity(tokens.len() + 1);
    argv.push(program.to_string());
    argv.extend(tokens.iter().cloned());
    argv
}

/// Elevator backed by a real program found on `PATH`.
#[derive(Debug, Clone)]
pub struct SystemElevator {
    program: String,
}

impl SystemElevator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Pick the platform's elevation program.
    pub fn detect() -> Self {
        let candidates: &[&str] = if cfg!(windows) {
            &["sudo.exe", "sudo", "runas.exe"]
        } else {
            &["sudo"]
        };
        let program = candidates
            .iter()
            .find(|bin| which(bin).is_ok())
            .copied()
            .unwrap_or("sudo");
        Self::new(program)
    }
}

impl Default for SystemElevator {
    fn default() -> Self {
        Self::detect()
    }
}

impl Elevator for SystemElevator {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&mut self, argv: &[String]) -> HalResult<Completion> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| HalError::ProgramNotFound(self.program.clone()))?;
        // Resolved by the OS at spawn time; an unexecutable binary is a launch failure.
        tracing::info!(%program, argc = args.len(), "launching elevated command");
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| HalError::launch(program, e))?;

        Ok(match status.code() {
            Some(code) => Completion::Exited(code),
            None => Completion::Signaled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_is_program_then_tokens_verbatim() {
        let tokens = vec!["apt".to_string(), "install".to_string(), "-y".to_string()];
        assert_eq!(elevation_argv("sudo", &tokens), vec!["sudo", "apt", "install", "-y"]);
    }

    #[test]
    fn missing_program_is_not_found() {
        let mut elevator = SystemElevator::new("minidos-no-such-elevator");
        let argv = elevation_argv(elevator.program(), &["true".to_string()]);
        let err = elevator.run(&argv).unwrap_err();
        assert!(matches!(err, HalError::ProgramNotFound(p) if p == "minidos-no-such-elevator"));
    }

    #[cfg(unix)]
    #[test]
    fn unexecutable_program_is_a_launch_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-sudo");
        std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o644)).unwrap();

        let program = script.display().to_string();
        let mut elevator = SystemElevator::new(program.as_str());
        let argv = elevation_argv(&program, &["true".to_string()]);
        let err = elevator.run(&argv).unwrap_err();
        assert!(matches!(err, HalError::Launch { .. }), "{err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn exit_code_is_reported() {
        // `sh` stands in for the elevation program.
        let mut elevator = SystemElevator::new("sh");
        let argv = elevation_argv("sh", &["-c".to_string(), "exit 3".to_string()]);
        assert_eq!(elevator.run(&argv).unwrap(), Completion::Exited(3));
        let ok = elevation_argv("sh", &["-c".to_string(), "true".to_string()]);
        assert!(elevator.run(&ok).unwrap().success());
    }
}
