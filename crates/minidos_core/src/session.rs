//! Session state
//!
//! The working directory belongs to the OS. [`Session`] only remembers the
//! last value it read so the prompt still has something to show if the
//! directory is deleted out from under us.

use crate::verb::Verb;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Session {
    working_directory: PathBuf,
}

impl Session {
    /// Bind to the process's current working directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            working_directory: env::current_dir()?,
        })
    }

    /// Re-read the working directory from the OS.
    pub fn current_dir(&mut self) -> &Path {
        match env::current_dir() {
            Ok(dir) => self.working_directory = dir,
            Err(err) => tracing::warn!(
                error = %err,
                last_known = %self.working_directory.display(),
                "could not read working directory"
            ),
        }
        &self.working_directory
    }

    /// `<absolute cwd>> `
    pub fn prompt(&mut self) -> String {
        format!("{}> ", self.current_dir().display())
    }

    /// Change the process working directory. On failure nothing changes.
    pub fn change_directory(&mut self, target: &Path) -> io::Result<&Path> {
        env::set_current_dir(target)?;
        let dir = self.current_dir();
        tracing::info!(cwd = %dir.display(), "working directory changed");
        Ok(dir)
    }

    /// Resolve a user-supplied name against the working directory.
    pub fn resolve(&mut self, name: &str) -> PathBuf {
        self.current_dir().join(name)
    }

    /// Command names, for history and completion.
    pub fn vocabulary(&self) -> impl Iterator<Item = &'static str> {
        Verb::ALL.iter().map(|verb| verb.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn change_directory_tracks_the_os() {
        let original = env::current_dir().unwrap();
        let dir = tempdir().unwrap();
        let mut session = Session::new().unwrap();

        session.change_directory(dir.path()).unwrap();
        let expected = dir.path().canonicalize().unwrap();
        assert_eq!(session.current_dir().canonicalize().unwrap(), expected);
        assert_eq!(env::current_dir().unwrap().canonicalize().unwrap(), expected);

        env::set_current_dir(original).unwrap();
    }

    #[test]
    #[serial]
    fn failed_change_leaves_directory_alone() {
        let mut session = Session::new().unwrap();
        let before = session.current_dir().to_path_buf();
        assert!(session.change_directory(Path::new("/definitely/not/here")).is_err());
        assert_eq!(session.current_dir(), before);
    }

    #[test]
    #[serial]
    fn prompt_shows_absolute_directory() {
        let mut session = Session::new().unwrap();
        let prompt = session.prompt();
        assert!(prompt.ends_with("> "));
        assert!(Path::new(prompt.trim_end_matches("> ")).is_absolute());
    }

    #[test]
    fn vocabulary_lists_every_verb() {
        let session = Session {
            working_directory: PathBuf::from("/"),
        };
        assert_eq!(session.vocabulary().count(), Verb::ALL.len());
        assert!(session.vocabulary().any(|v| v == "sudo"));
    }
}
