#![allow(dead_code)]

use minidos_builtins::{execute_line, BuiltinContext, Flow};
use minidos_core::{Session, Transcript};
use minidos_hal::{Completion, Elevator, HalError, HalResult};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary working directory; the previous one is restored on drop.
pub struct Sandbox {
    dir: TempDir,
    root: PathBuf,
    original: Option<PathBuf>,
}

impl Sandbox {
    pub fn new() -> Self {
        let original = env::current_dir().ok();
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        env::set_current_dir(&root).unwrap();
        Self { dir, root, original }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        if let Some(original) = &self.original {
            let _ = env::set_current_dir(original);
        }
    }
}

/// How the fake elevation program behaves.
#[derive(Debug, Clone, Copy)]
pub enum Script {
    Exit(i32),
    Signal,
    Missing,
    Denied,
}

pub struct FakeElevator {
    pub program: String,
    pub script: Script,
    pub calls: Vec<Vec<String>>,
}

impl FakeElevator {
    pub fn new(script: Script) -> Self {
        Self {
            program: "sudo".to_string(),
            script,
            calls: Vec::new(),
        }
    }
}

impl Elevator for FakeElevator {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&mut self, argv: &[String]) -> HalResult<Completion> {
        self.calls.push(argv.to_vec());
        match self.script {
            Script::Exit(code) => Ok(Completion::Exited(code)),
            Script::Signal => Ok(Completion::Signaled),
            Script::Missing => Err(HalError::ProgramNotFound(self.program.clone())),
            Script::Denied => Err(HalError::Launch {
                program: self.program.clone(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            }),
        }
    }
}

/// A session rooted in a fresh sandbox, driven line by line.
pub struct Harness {
    pub sandbox: Sandbox,
    pub session: Session,
    pub console: Transcript,
    pub elevator: FakeElevator,
}

impl Harness {
    pub fn new() -> Self {
        let sandbox = Sandbox::new();
        Self {
            session: Session::new().unwrap(),
            sandbox,
            console: Transcript::new(),
            elevator: FakeElevator::new(Script::Exit(0)),
        }
    }

    pub fn run(&mut self, line: &str) -> Flow {
        let mut ctx = BuiltinContext::new(&mut self.session, &mut self.console, &mut self.elevator);
        execute_line(line, &mut ctx)
    }

    /// Run a line and return what it printed.
    pub fn output_of(&mut self, line: &str) -> String {
        self.console.take_output();
        self.run(line);
        self.console.take_output()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.sandbox.root().join(name)
    }

    pub fn write(&self, name: &str, contents: &[u8]) {
        fs::write(self.path(name), contents).unwrap();
    }

    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.path(name)).unwrap()
    }

    pub fn mkdir(&self, name: &str) {
        fs::create_dir(self.path(name)).unwrap();
    }

    pub fn prompt(&mut self) -> String {
        self.session.prompt()
    }

    /// Every path under the sandbox with its content (`None` for directories).
    pub fn snapshot(&self) -> BTreeMap<String, Option<Vec<u8>>> {
        let mut out = BTreeMap::new();
        walk(self.sandbox.root(), self.sandbox.root(), &mut out);
        out
    }
}

fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<String, Option<Vec<u8>>>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let rel = path.strip_prefix(root).unwrap().to_string_lossy().into_owned();
        if path.is_dir() {
            out.insert(rel, None);
            walk(root, &path, out);
        } else {
            out.insert(rel, Some(fs::read(&path).unwrap()));
        }
    }
}
