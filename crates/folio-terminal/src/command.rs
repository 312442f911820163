//! The command trait and the environment handed to every handler.

use std::collections::BTreeMap;

use folio_platform::Capabilities;
use folio_types::config::TerminalConfig;
use folio_types::error::{Capability, FolioError, Result};
use folio_vfs::VirtualFs;

use crate::parser::Invocation;
use crate::registry::CommandRegistry;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text, one entry per rendered line.
    Lines(Vec<String>),
    /// Command produced no visible output.
    None,
    /// Signal to clear the terminal scrollback.
    Clear,
}

impl CommandOutput {
    /// Split `text` on newlines into a `Lines` output.
    pub fn text(text: impl AsRef<str>) -> Self {
        Self::Lines(text.as_ref().lines().map(str::to_string).collect())
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self::Lines(vec![line.into()])
    }

    /// The lines a downstream pipe stage receives.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Self::Lines(lines) => lines,
            Self::None | Self::Clear => Vec::new(),
        }
    }
}

/// One entry of a command's flag schema, shown by `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub help: &'static str,
}

/// Session state mutated by the shell builtins.
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    pub env: BTreeMap<String, String>,
    pub aliases: BTreeMap<String, String>,
    /// Append-only log of submitted lines, after history expansion.
    pub history: Vec<String>,
}

/// Everything a handler may touch while it runs.
pub struct Environment<'a> {
    pub vfs: &'a mut VirtualFs,
    pub shell: &'a mut ShellState,
    /// Read-only view of the registry, for `help` and `which`.
    pub registry: &'a CommandRegistry,
    pub caps: &'a mut Capabilities,
    pub config: &'a TerminalConfig,
    /// Output lines of the previous pipe stage. Consuming them is optional.
    pub pipe_input: Option<Vec<String>>,
}

/// A single executable command.
pub trait Command {
    /// The canonical name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "ls \[-la\] \[path\]").
    fn usage(&self) -> &str;

    /// Command category for grouping in `help` output.
    fn category(&self) -> &str {
        "general"
    }

    /// Alternative names resolving to this command.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    fn flags(&self) -> &[FlagSpec] {
        &[]
    }

    fn examples(&self) -> &[&str] {
        &[]
    }

    /// When true the engine rejects invocations without positional
    /// arguments and prints the usage line instead.
    fn requires_args(&self) -> bool {
        false
    }

    /// Host capabilities that must be present before `execute` runs.
    fn capabilities(&self) -> &[Capability] {
        &[]
    }

    /// Execute the command with its parsed invocation and environment.
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// A `usage: ...` error for `cmd`.
pub fn usage_error(cmd: &dyn Command) -> FolioError {
    FolioError::Command(format!("usage: {}", cmd.usage()))
}
