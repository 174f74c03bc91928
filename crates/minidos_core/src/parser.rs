//! Line parser
//!
//! A line is split on runs of whitespace. There is no quoting, escaping,
//! globbing or comment syntax: `"a b"` is two tokens, `"a` and `b"`.

use crate::verb::{UnknownVerb, Verb};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// First token, lowercased.
    pub verb: String,
    /// Remaining tokens, verbatim.
    pub args: Vec<String>,
}

impl Invocation {
    pub fn resolve(&self) -> Result<Verb, UnknownVerb> {
        self.verb.parse()
    }
}

/// Parse one line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<Invocation> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next()?.to_lowercase();
    Some(Invocation {
        verb,
        args: tokens.map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t  "), None);
    }

    #[test]
    fn verb_is_lowercased_arguments_are_not() {
        let inv = parse_line("  COPY  Report.TXT\tbackup.txt  ").unwrap();
        assert_eq!(inv.verb, "copy");
        assert_eq!(inv.args, vec!["Report.TXT", "backup.txt"]);
        assert_eq!(inv.resolve(), Ok(Verb::Copy));
    }

    #[test]
    fn quotes_are_ordinary_characters() {
        let inv = parse_line("echo \"hello   world\"").unwrap();
        assert_eq!(inv.args, vec!["\"hello", "world\""]);
    }

    #[test]
    fn unknown_verb_is_kept_for_the_diagnostic() {
        let inv = parse_line("FORMAT c:").unwrap();
        assert_eq!(inv.resolve(), Err(UnknownVerb("format".into())));
    }

    proptest! {
        #[test]
        fn tokens_survive_arbitrary_spacing(
            tokens in prop::collection::vec("[a-z0-9._-]{1,8}", 1..6),
            gaps in prop::collection::vec("[ \t]{1,4}", 6),
        ) {
            let mut line = gaps[0].clone();
            for (i, tok) in tokens.iter().enumerate() {
                line.push_str(tok);
                line.push_str(&gaps[(i + 1) % gaps.len()]);
            }
            let inv = parse_line(&line).unwrap();
            prop_assert_eq!(&inv.verb, &tokens[0]);
            prop_assert_eq!(&inv.args[..], &tokens[1..]);
        }
    }
}
