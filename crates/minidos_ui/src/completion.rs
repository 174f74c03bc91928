//! Tab completion of command names for the history editor.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Completes the first word of a line against the known verbs.
pub struct VerbHelper {
    verbs: Vec<&'static str>,
}

impl VerbHelper {
    pub fn new(verbs: impl IntoIterator<Item = &'static str>) -> Self {
        let mut verbs: Vec<_> = verbs.into_iter().collect();
        verbs.sort_unstable();
        Self { verbs }
    }

    /// Start of the word being completed and the verbs it could become.
    /// Arguments are never completed.
    pub fn candidates(&self, head: &str) -> (usize, Vec<&'static str>) {
        let start = head.len() - head.trim_start().len();
        let word = &head[start..];
        if word.contains(char::is_whitespace) {
            return (start, Vec::new());
        }
        let word = word.to_lowercase();
        let matches = self
            .verbs
            .iter()
            .copied()
            .filter(|verb| verb.starts_with(&word))
            .collect();
        (start, matches)
    }
}

impl Completer for VerbHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, verbs) = self.candidates(&line[..pos]);
        let pairs = verbs
            .into_iter()
            .map(|verb| Pair {
                display: verb.to_string(),
                replacement: format!("{verb} "),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for VerbHelper {
    type Hint = String;
}

impl Highlighter for VerbHelper {}

impl Validator for VerbHelper {}

impl Helper for VerbHelper {}
