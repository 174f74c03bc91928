//! Interactive front end for MiniDOS: line input, the stdout console and the
//! read-dispatch loop.

pub mod completion;
pub mod line_editor;
pub mod repl;
pub mod terminal;

pub use completion::VerbHelper;
pub use line_editor::{
    open_reader, HistoryReader, LineEditorConfig, LineSource, PlainReader, ReadOutcome,
};
pub use repl::Repl;
pub use terminal::Terminal;
