//! Line parser: chains (`&&`, `;`), pipes (`|`) and flag classification.
//!
//! Operators are found with the same quote and escape rules the tokenizer
//! uses, so `echo "a;b"` is one command. Chains bind looser than pipes:
//! `a | b; c` is a chain of a pipeline and a single command.

use std::collections::BTreeMap;
use std::fmt;

use crate::tokenizer::tokenize;

// ---------------------------------------------------------------------------
// Parsed representation
// ---------------------------------------------------------------------------

/// Value of a parsed flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// `-a` or `--all`.
    Bool(bool),
    /// `--name=value`.
    Value(String),
}

/// One command with its classified arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    /// Positional arguments in order.
    pub args: Vec<String>,
    pub flags: BTreeMap<String, FlagValue>,
    /// Flag tokens exactly as typed.
    pub raw_flags: Vec<String>,
    /// Every token after the name, flags and positionals interleaved.
    pub words: Vec<String>,
    /// The source text of this command.
    pub raw: String,
}

impl Invocation {
    /// Build an invocation from `raw` text. `None` if it holds no words.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let mut tokens = tokenize(raw).into_iter();
        let name = tokens.next()?;
        let words: Vec<String> = tokens.collect();

        let mut args = Vec::new();
        let mut flags = BTreeMap::new();
        let mut raw_flags = Vec::new();
        for word in &words {
            match classify(word) {
                Word::Long(key, value) => {
                    flags.insert(key, value);
                    raw_flags.push(word.clone());
                },
                Word::Short(cluster) => {
                    for ch in cluster.chars() {
                        flags.insert(ch.to_string(), FlagValue::Bool(true));
                    }
                    raw_flags.push(word.clone());
                },
                Word::Positional => args.push(word.clone()),
            }
        }

        Some(Self {
            name,
            args,
            flags,
            raw_flags,
            words,
            raw: raw.trim().to_string(),
        })
    }

    /// Whether `name` was given as a flag, in any form.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// Whether any of `names` was given as a flag.
    pub fn has_any_flag(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.has_flag(n))
    }

    /// The value of a `--name=value` flag.
    pub fn flag_value(&self, name: &str) -> Option<&str> {
        match self.flags.get(name) {
            Some(FlagValue::Value(v)) => Some(v),
            _ => None,
        }
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

enum Word<'a> {
    Long(String, FlagValue),
    Short(&'a str),
    Positional,
}

fn classify(word: &str) -> Word<'_> {
    if let Some(long) = word.strip_prefix("--") {
        if long.is_empty() {
            return Word::Positional;
        }
        return match long.split_once('=') {
            Some((key, value)) => {
                Word::Long(key.to_string(), FlagValue::Value(value.to_string()))
            },
            None => Word::Long(long.to_string(), FlagValue::Bool(true)),
        };
    }
    match word.strip_prefix('-') {
        Some(cluster)
            if !cluster.is_empty() && !cluster.starts_with(|c: char| c.is_ascii_digit()) =>
        {
            Word::Short(cluster)
        },
        _ => Word::Positional,
    }
}

/// Operator that ended a chain segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `&&`
    And,
    /// `;`
    Seq,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Seq => ";",
        }
    }
}

/// One element of a chain. `separator` is `None` on the trailing segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSegment {
    pub command: ParsedCommand,
    pub separator: Option<Separator>,
}

/// The structure of a parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Single(Invocation),
    Chained(Vec<ChainSegment>),
    Piped(Vec<Invocation>),
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural problems in a command line. Positions are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing but whitespace or empty quotes.
    #[error("empty command")]
    EmptyCommand,
    /// `| grep foo`
    #[error("unexpected '|' at column {}", .position + 1)]
    UnexpectedPipe { position: usize },
    /// `ls | | grep`
    #[error("empty pipe stage at column {}", .position + 1)]
    EmptyPipeStage { position: usize },
    /// `ls |`
    #[error("unexpected end after '|' at column {}", .position + 1)]
    TrailingPipe { position: usize },
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a full command line.
pub fn parse_line(line: &str) -> Result<ParsedCommand, ParseError> {
    match split_chains(line) {
        Some(segments) => segments
            .into_iter()
            .map(|(text, separator)| {
                Ok(ChainSegment {
                    command: parse_pipeline(&text)?,
                    separator,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ParsedCommand::Chained),
        None => parse_pipeline(line),
    }
}

/// Parse one chain segment: a pipeline or a single command.
fn parse_pipeline(text: &str) -> Result<ParsedCommand, ParseError> {
    let stages = split_pipes(text);
    if stages.len() == 1 {
        return Invocation::from_raw(&stages[0].0)
            .map(ParsedCommand::Single)
            .ok_or(ParseError::EmptyCommand);
    }

    let last = stages.len() - 1;
    let mut invocations = Vec::with_capacity(stages.len());
    for (i, (stage, pipe_at)) in stages.iter().enumerate() {
        match Invocation::from_raw(stage) {
            Some(inv) => invocations.push(inv),
            None if i == 0 => return Err(ParseError::UnexpectedPipe { position: *pipe_at }),
            None if i == last => return Err(ParseError::TrailingPipe { position: *pipe_at }),
            None => return Err(ParseError::EmptyPipeStage { position: *pipe_at }),
        }
    }
    Ok(ParsedCommand::Piped(invocations))
}

/// Quote and escape state shared by the operator scanners.
#[derive(Default)]
struct Scanner {
    quote: Option<char>,
    escaped: bool,
}

impl Scanner {
    /// Feed one character; true if it is outside quotes and not escaped.
    fn is_operator_position(&mut self, ch: char) -> bool {
        if self.escaped {
            self.escaped = false;
            return false;
        }
        match ch {
            '\\' => {
                self.escaped = true;
                false
            },
            '"' | '\'' => {
                match self.quote {
                    None => self.quote = Some(ch),
                    Some(open) if open == ch => self.quote = None,
                    Some(_) => {},
                }
                false
            },
            _ => self.quote.is_none(),
        }
    }
}

/// Split on unquoted `&&` and `;`.
///
/// `None` when the line has no chain operator. Otherwise each non-empty
/// segment is paired with the separator that ended it.
fn split_chains(line: &str) -> Option<Vec<(String, Option<Separator>)>> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut found = false;
    let mut scanner = Scanner::default();
    let mut chars = line.chars().peekable();

    let mut close = |current: &mut String, separator: Option<Separator>| {
        let text = current.trim();
        if !text.is_empty() {
            segments.push((text.to_string(), separator));
        }
        current.clear();
    };

    while let Some(ch) = chars.next() {
        let free = scanner.is_operator_position(ch);
        if free && ch == ';' {
            found = true;
            close(&mut current, Some(Separator::Seq));
        } else if free && ch == '&' && chars.peek() == Some(&'&') {
            chars.next();
            found = true;
            close(&mut current, Some(Separator::And));
        } else {
            current.push(ch);
        }
    }
    close(&mut current, None);

    found.then_some(segments)
}

/// Split on unquoted `|`. Each stage carries the byte offset of the pipe
/// that ends it; the final stage carries the offset of the last pipe.
fn split_pipes(text: &str) -> Vec<(String, usize)> {
    let mut stages = Vec::new();
    let mut scanner = Scanner::default();
    let mut start = 0;
    let mut prev_pipe = 0;

    for (i, ch) in text.char_indices() {
        if scanner.is_operator_position(ch) && ch == '|' {
            stages.push((text[start..i].to_string(), i));
            start = i + 1;
            prev_pipe = i;
        }
    }
    stages.push((text[start..].to_string(), prev_pipe));
    stages
}

impl fmt::Display for ParsedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(inv) => f.write_str(&inv.raw),
            Self::Piped(stages) => {
                let raws: Vec<&str> = stages.iter().map(|s| s.raw.as_str()).collect();
                f.write_str(&raws.join(" | "))
            },
            Self::Chained(segments) => {
                for (i, seg) in segments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", seg.command)?;
                    if let Some(sep) = seg.separator {
                        write!(f, " {}", sep.as_str())?;
                    }
                }
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(line: &str) -> Invocation {
        match parse_line(line).unwrap() {
            ParsedCommand::Single(inv) => inv,
            other => panic!("expected single command, got {other:?}"),
        }
    }

    #[test]
    fn clustered_short_flags() {
        let inv = single("ls -la /tmp");
        assert_eq!(inv.name, "ls");
        assert_eq!(inv.args, vec!["/tmp"]);
        assert_eq!(inv.flags.get("l"), Some(&FlagValue::Bool(true)));
        assert_eq!(inv.flags.get("a"), Some(&FlagValue::Bool(true)));
        assert_eq!(inv.flags.len(), 2);
        assert_eq!(inv.raw_flags, vec!["-la"]);
        assert_eq!(inv.words, vec!["-la", "/tmp"]);
    }

    #[test]
    fn long_flags() {
        let inv = single("grep --ignore-case --max=3 foo");
        assert!(inv.has_flag("ignore-case"));
        assert_eq!(inv.flag_value("max"), Some("3"));
        assert_eq!(inv.args, vec!["foo"]);
    }

    #[test]
    fn negative_numbers_are_positional() {
        let inv = single("calc -5 + 3");
        assert_eq!(inv.args, vec!["-5", "+", "3"]);
        assert!(inv.flags.is_empty());
    }

    #[test]
    fn bare_dashes_are_positional() {
        let inv = single("cd -");
        assert_eq!(inv.args, vec!["-"]);
        let inv = single("echo -- x");
        assert_eq!(inv.args, vec!["--", "x"]);
    }

    #[test]
    fn quoted_operators_do_not_split() {
        let inv = single(r#"echo "a; b && c | d""#);
        assert_eq!(inv.args, vec!["a; b && c | d"]);
        let inv = single(r"echo a\;b");
        assert_eq!(inv.name, "echo");
    }

    #[test]
    fn chain_with_separators() {
        let parsed = parse_line("echo a; echo b && echo c").unwrap();
        let ParsedCommand::Chained(segments) = parsed else {
            panic!("expected chain");
        };
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].separator, Some(Separator::Seq));
        assert_eq!(segments[1].separator, Some(Separator::And));
        assert_eq!(segments[2].separator, None);
        assert!(matches!(&segments[2].command, ParsedCommand::Single(inv) if inv.args == ["c"]));
    }

    #[test]
    fn chain_skips_empty_segments() {
        let ParsedCommand::Chained(segments) = parse_line(";; echo a;").unwrap() else {
            panic!("expected chain");
        };
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].separator, Some(Separator::Seq));
    }

    #[test]
    fn chain_segments_may_be_pipelines() {
        let ParsedCommand::Chained(segments) = parse_line("ls | grep a; pwd").unwrap() else {
            panic!("expected chain");
        };
        assert!(matches!(&segments[0].command, ParsedCommand::Piped(stages) if stages.len() == 2));
        assert!(matches!(&segments[1].command, ParsedCommand::Single(_)));
    }

    #[test]
    fn pipeline_stages() {
        let ParsedCommand::Piped(stages) = parse_line("cat a.txt | grep -i foo | wc -l").unwrap()
        else {
            panic!("expected pipe");
        };
        let names: Vec<&str> = stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["cat", "grep", "wc"]);
        assert_eq!(stages[1].raw, "grep -i foo");
    }

    #[test]
    fn pipe_errors() {
        assert_eq!(
            parse_line("| grep a"),
            Err(ParseError::UnexpectedPipe { position: 0 })
        );
        assert_eq!(
            parse_line("ls | | grep"),
            Err(ParseError::EmptyPipeStage { position: 5 })
        );
        assert_eq!(
            parse_line("ls |"),
            Err(ParseError::TrailingPipe { position: 3 })
        );
        assert_eq!(parse_line("   "), Err(ParseError::EmptyCommand));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::TrailingPipe { position: 3 };
        assert_eq!(err.to_string(), "unexpected end after '|' at column 4");
    }

    #[test]
    fn display_round_trips_structure() {
        let parsed = parse_line("ls -la | grep x;pwd").unwrap();
        assert_eq!(parsed.to_string(), "ls -la | grep x ; pwd");
    }
}
