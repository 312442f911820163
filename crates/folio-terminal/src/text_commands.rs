//! Text commands that read a file or the previous pipe stage: grep, head, wc.

use folio_types::error::Result;

use crate::command::{Command, CommandOutput, Environment, FlagSpec, usage_error};
use crate::commands::{parse_count, read_input};
use crate::parser::Invocation;
use crate::registry::CommandRegistry;

/// Register the text commands.
pub fn register_text_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(GrepCmd));
    reg.register(Box::new(HeadCmd));
    reg.register(Box::new(WcCmd));
}

// ---------------------------------------------------------------------------
// grep
// ---------------------------------------------------------------------------

struct GrepCmd;
impl Command for GrepCmd {
    fn name(&self) -> &str {
        "grep"
    }
    fn description(&self) -> &str {
        "Print lines containing a pattern"
    }
    fn usage(&self) -> &str {
        "grep [-ivnc] <pattern> [file]"
    }
    fn category(&self) -> &str {
        "text"
    }
    fn flags(&self) -> &[FlagSpec] {
        &[
            FlagSpec {
                name: "-i",
                help: "ignore case",
            },
            FlagSpec {
                name: "-v",
                help: "select non-matching lines",
            },
            FlagSpec {
                name: "-n",
                help: "prefix line numbers",
            },
            FlagSpec {
                name: "-c",
                help: "print only a count",
            },
        ]
    }
    fn examples(&self) -> &[&str] {
        &["grep -n rust /about.md", "ls | grep .md"]
    }
    fn requires_args(&self) -> bool {
        true
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let pattern = inv.arg(0).ok_or_else(|| usage_error(self))?;
        let ignore_case = inv.has_flag("i");
        let invert = inv.has_flag("v");
        let input = read_input(inv.arg(1), env, "grep")?;

        let needle = if ignore_case {
            pattern.to_lowercase()
        } else {
            pattern.to_string()
        };
        let matched: Vec<(usize, String)> = input
            .into_iter()
            .enumerate()
            .filter(|(_, line)| {
                let hit = if ignore_case {
                    line.to_lowercase().contains(&needle)
                } else {
                    line.contains(&needle)
                };
                hit != invert
            })
            .collect();

        if inv.has_flag("c") {
            return Ok(CommandOutput::line(matched.len().to_string()));
        }
        let numbered = inv.has_flag("n");
        Ok(CommandOutput::Lines(
            matched
                .into_iter()
                .map(|(i, line)| {
                    if numbered {
                        format!("{}:{line}", i + 1)
                    } else {
                        line
                    }
                })
                .collect(),
        ))
    }
}

// ---------------------------------------------------------------------------
// head
// ---------------------------------------------------------------------------

struct HeadCmd;
impl Command for HeadCmd {
    fn name(&self) -> &str {
        "head"
    }
    fn description(&self) -> &str {
        "Show the first lines of input"
    }
    fn usage(&self) -> &str {
        "head [-n N | -N] [file]"
    }
    fn category(&self) -> &str {
        "text"
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let (n, file) = parse_n_flag(inv, 10)?;
        let input = read_input(file, env, "head")?;
        Ok(CommandOutput::Lines(input.into_iter().take(n).collect()))
    }
}

/// `-n N` or `-N`, plus an optional file.
fn parse_n_flag(inv: &Invocation, default: usize) -> Result<(usize, Option<&str>)> {
    let mut n = default;
    let mut file = None;
    let mut words = inv.words.iter();
    while let Some(word) = words.next() {
        if word == "-n" {
            n = parse_count("head", words.next().map(String::as_str))?;
        } else if let Some(count) = word.strip_prefix('-')
            && count.starts_with(|c: char| c.is_ascii_digit())
        {
            n = parse_count("head", Some(count))?;
        } else {
            file = Some(word.as_str());
        }
    }
    Ok((n, file))
}

// ---------------------------------------------------------------------------
// wc
// ---------------------------------------------------------------------------

struct WcCmd;
impl Command for WcCmd {
    fn name(&self) -> &str {
        "wc"
    }
    fn description(&self) -> &str {
        "Count lines, words, and bytes"
    }
    fn usage(&self) -> &str {
        "wc [-l|-w|-c] [file]"
    }
    fn category(&self) -> &str {
        "text"
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let input = read_input(inv.arg(0), env, "wc")?;
        let lines = input.len();
        let words: usize = input.iter().map(|l| l.split_whitespace().count()).sum();
        // Each line counts its newline.
        let bytes: usize = input.iter().map(|l| l.len() + 1).sum();

        let out = if inv.has_flag("l") {
            lines.to_string()
        } else if inv.has_flag("w") {
            words.to_string()
        } else if inv.has_flag("c") {
            bytes.to_string()
        } else {
            format!("{lines:>7} {words:>7} {bytes:>7}")
        };
        Ok(CommandOutput::line(out))
    }
}

#[cfg(test)]
mod tests {
    use folio_platform::Capabilities;
    use folio_types::config::TerminalConfig;
    use folio_vfs::{TreeNode, VirtualFs};

    use super::*;
    use crate::command::ShellState;

    fn run(cmd: &dyn Command, line: &str, pipe: Option<&[&str]>) -> Result<Vec<String>> {
        let mut fs = VirtualFs::new(TreeNode::folder(
            "",
            vec![TreeNode::file("notes.txt", "Rust is fun\nso is C\nrust again")],
        ))
        .unwrap();
        let reg = CommandRegistry::new();
        let mut shell = ShellState::default();
        let mut caps = Capabilities::none();
        let config = TerminalConfig::default();
        let mut env = Environment {
            vfs: &mut fs,
            shell: &mut shell,
            registry: &reg,
            caps: &mut caps,
            config: &config,
            pipe_input: pipe.map(|p| p.iter().map(|s| (*s).to_string()).collect()),
        };
        let inv = Invocation::from_raw(line).unwrap();
        Ok(cmd.execute(&inv, &mut env)?.into_lines())
    }

    #[test]
    fn grep_file_and_flags() {
        assert_eq!(run(&GrepCmd, "grep rust notes.txt", None).unwrap(), vec!["rust again"]);
        assert_eq!(
            run(&GrepCmd, "grep -in rust notes.txt", None).unwrap(),
            vec!["1:Rust is fun", "3:rust again"]
        );
        assert_eq!(run(&GrepCmd, "grep -vc rust notes.txt", None).unwrap(), vec!["2"]);
    }

    #[test]
    fn grep_reads_pipe() {
        let out = run(&GrepCmd, "grep .md", Some(&["a.md", "b.txt"])).unwrap();
        assert_eq!(out, vec!["a.md"]);
        assert!(run(&GrepCmd, "grep x", None).is_err());
    }

    #[test]
    fn head_counts() {
        let pipe: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = pipe.iter().map(String::as_str).collect();
        assert_eq!(run(&HeadCmd, "head", Some(&refs)).unwrap().len(), 10);
        assert_eq!(run(&HeadCmd, "head -n 3", Some(&refs)).unwrap(), vec!["1", "2", "3"]);
        assert_eq!(run(&HeadCmd, "head -2 notes.txt", None).unwrap().len(), 2);
        assert!(run(&HeadCmd, "head -n x", Some(&refs)).is_err());
    }

    #[test]
    fn wc_modes() {
        assert_eq!(run(&WcCmd, "wc -l notes.txt", None).unwrap(), vec!["3"]);
        assert_eq!(run(&WcCmd, "wc -w notes.txt", None).unwrap(), vec!["8"]);
        assert_eq!(run(&WcCmd, "wc -l", Some(&["a", "b"])).unwrap(), vec!["2"]);
        assert_eq!(
            run(&WcCmd, "wc", Some(&["a b"])).unwrap(),
            vec!["      1       2       4"]
        );
    }
}
