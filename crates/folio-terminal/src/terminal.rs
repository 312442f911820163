//! The execution engine: one interactive session over a VFS.
//!
//! A submitted line goes through history expansion, alias expansion,
//! variable expansion and parsing, then every command in it is resolved
//! against the registry and dispatched in order. All failures are rendered
//! as error lines; nothing ends the session.

use std::fmt;

use folio_platform::Capabilities;
use folio_types::config::TerminalConfig;
use folio_types::error::{FolioError, Result};
use folio_vfs::VirtualFs;

use crate::command::{CommandOutput, Environment, ShellState};
use crate::expand::{expand_aliases, expand_history, expand_variables};
use crate::parser::{Invocation, ParsedCommand, parse_line};
use crate::registry::CommandRegistry;

/// One rendered line of terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    /// Echo of a submitted line with the prompt it was typed at.
    Prompt { prompt: String, input: String },
    Text(String),
    Error(String),
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prompt { prompt, input } => write!(f, "{prompt}{input}"),
            Self::Text(text) | Self::Error(text) => f.write_str(text),
        }
    }
}

/// Where the session is in handling a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Parsing,
    Resolving,
    Dispatching,
    Rendering,
}

/// Direction for [`Terminal::navigate_history`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Up,
    Down,
}

/// Output of one line, accumulated while dispatching.
#[derive(Default)]
struct Rendered {
    lines: Vec<OutputLine>,
    cleared: bool,
}

impl Rendered {
    fn output(&mut self, output: CommandOutput) {
        match output {
            CommandOutput::Lines(lines) => {
                self.lines.extend(lines.into_iter().map(OutputLine::Text));
            },
            CommandOutput::None => {},
            CommandOutput::Clear => {
                self.lines.clear();
                self.cleared = true;
            },
        }
    }

    fn error(&mut self, err: &FolioError) {
        self.lines.push(OutputLine::Error(err.to_string()));
    }
}

/// An interactive session: registry, filesystem, shell state and host
/// capabilities, plus the scrollback and history cursor.
pub struct Terminal {
    registry: CommandRegistry,
    vfs: VirtualFs,
    shell: ShellState,
    caps: Capabilities,
    config: TerminalConfig,
    scrollback: Vec<OutputLine>,
    history_cursor: Option<usize>,
    state: SessionState,
}

impl Terminal {
    /// A session with every built-in command registered.
    pub fn new(vfs: VirtualFs, caps: Capabilities, config: TerminalConfig) -> Self {
        let mut registry = CommandRegistry::new();
        crate::register_builtins(&mut registry);
        Self::with_registry(registry, vfs, caps, config)
    }

    /// A session over a caller-assembled registry.
    pub fn with_registry(
        registry: CommandRegistry,
        vfs: VirtualFs,
        caps: Capabilities,
        config: TerminalConfig,
    ) -> Self {
        let mut shell = ShellState::default();
        shell.env.insert("USER".to_string(), config.user.clone());
        shell.env.insert("HOSTNAME".to_string(), config.hostname.clone());
        shell.env.insert("HOME".to_string(), "/".to_string());
        shell.env.insert("SHELL".to_string(), "folio".to_string());
        shell
            .env
            .extend(config.env.iter().map(|(k, v)| (k.clone(), v.clone())));
        shell
            .aliases
            .extend(config.aliases.iter().map(|(k, v)| (k.clone(), v.clone())));

        log::debug!(
            "Terminal session for {}@{} with {} commands",
            config.user,
            config.hostname,
            registry.len()
        );
        Self {
            registry,
            vfs: vfs.with_owner(config.owner.clone()),
            shell,
            caps,
            config,
            scrollback: Vec::new(),
            history_cursor: None,
            state: SessionState::Idle,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// `user@host:~/dir$ `, with the root shown as `~`.
    pub fn prompt(&self) -> String {
        let cwd = self.vfs.pwd();
        let shown = if cwd == "/" {
            "~".to_string()
        } else {
            format!("~{cwd}")
        };
        format!("{}@{}:{shown}$ ", self.config.user, self.config.hostname)
    }

    pub fn cwd(&self) -> &str {
        self.vfs.pwd()
    }

    pub fn scrollback(&self) -> &[OutputLine] {
        &self.scrollback
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    pub fn vfs(&self) -> &VirtualFs {
        &self.vfs
    }

    pub fn vfs_mut(&mut self) -> &mut VirtualFs {
        &mut self.vfs
    }

    pub fn shell(&self) -> &ShellState {
        &self.shell
    }

    pub fn capabilities_mut(&mut self) -> &mut Capabilities {
        &mut self.caps
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Input helpers
    // -----------------------------------------------------------------------

    /// Canonical command names starting with `partial`.
    pub fn command_suggestions(&self, partial: &str) -> Vec<String> {
        self.registry.completions(partial)
    }

    /// Step through the history log.
    ///
    /// `Up` walks toward older entries and stops at the oldest. `Down`
    /// walks back and yields `Some("")` once it moves past the newest entry.
    /// `None` means there is nothing to navigate.
    pub fn navigate_history(&mut self, direction: HistoryDirection) -> Option<String> {
        let len = self.shell.history.len();
        if len == 0 {
            return None;
        }
        match direction {
            HistoryDirection::Up => {
                let idx = match self.history_cursor {
                    None => len - 1,
                    Some(i) => i.saturating_sub(1),
                };
                self.history_cursor = Some(idx);
                self.shell.history.get(idx).cloned()
            },
            HistoryDirection::Down => {
                let i = self.history_cursor?;
                if i + 1 < len {
                    self.history_cursor = Some(i + 1);
                    self.shell.history.get(i + 1).cloned()
                } else {
                    self.history_cursor = None;
                    Some(String::new())
                }
            },
        }
    }

    // -----------------------------------------------------------------------
    // Execution
    // -----------------------------------------------------------------------

    /// Run one line and return what it rendered.
    ///
    /// The same lines are appended to the scrollback; a `clear` empties the
    /// scrollback and drops everything rendered before it on this line.
    pub fn execute_command(&mut self, input: &str) -> Vec<OutputLine> {
        let prompt = self.prompt();
        let trimmed = input.trim();
        self.history_cursor = None;

        let mut rendered = Rendered::default();
        if trimmed.is_empty() {
            rendered.lines.push(OutputLine::Prompt {
                prompt,
                input: String::new(),
            });
            return self.finish(rendered);
        }

        self.transition(SessionState::Parsing);
        let line = match expand_history(trimmed, &self.shell.history) {
            Ok(line) => line,
            Err(e) => {
                rendered.lines.push(OutputLine::Prompt {
                    prompt,
                    input: trimmed.to_string(),
                });
                rendered.error(&e);
                return self.finish(rendered);
            },
        };
        self.shell.history.push(line.clone());
        rendered.lines.push(OutputLine::Prompt {
            prompt,
            input: line.clone(),
        });

        let aliased = expand_aliases(&line, &self.shell.aliases, self.config.max_alias_depth);
        let expanded = expand_variables(&aliased, |name| self.lookup_var(name));
        match parse_line(&expanded) {
            Ok(parsed) => {
                log::debug!("Parsed {parsed}");
                self.dispatch(parsed, &mut rendered);
            },
            Err(e) => rendered.error(&FolioError::Parse(e.to_string())),
        }
        self.finish(rendered)
    }

    fn lookup_var(&self, name: &str) -> Option<String> {
        match self.shell.env.get(name) {
            Some(value) => Some(value.clone()),
            None if name == "PWD" => Some(self.vfs.pwd().to_string()),
            None => None,
        }
    }

    fn finish(&mut self, rendered: Rendered) -> Vec<OutputLine> {
        self.transition(SessionState::Rendering);
        if rendered.cleared {
            self.scrollback.clear();
        }
        self.scrollback.extend(rendered.lines.iter().cloned());
        self.transition(SessionState::Idle);
        rendered.lines
    }

    fn dispatch(&mut self, parsed: ParsedCommand, rendered: &mut Rendered) {
        match parsed {
            ParsedCommand::Single(inv) => match self.run(&inv, None) {
                Ok(output) => rendered.output(output),
                Err(e) => rendered.error(&e),
            },
            ParsedCommand::Chained(segments) => {
                // Every segment runs, whatever the previous one returned.
                for segment in segments {
                    self.dispatch(segment.command, rendered);
                }
            },
            ParsedCommand::Piped(stages) => {
                let last = stages.len().saturating_sub(1);
                let mut pipe_input = None;
                for (i, stage) in stages.iter().enumerate() {
                    match self.run(stage, pipe_input.take()) {
                        Ok(output) if i == last => rendered.output(output),
                        Ok(output) => pipe_input = Some(output.into_lines()),
                        Err(e) => {
                            rendered.error(&e);
                            break;
                        },
                    }
                }
            },
        }
    }

    /// Resolve and run one invocation.
    fn run(
        &mut self,
        inv: &Invocation,
        pipe_input: Option<Vec<String>>,
    ) -> Result<CommandOutput> {
        self.transition(SessionState::Resolving);
        let cmd = self
            .registry
            .get(&inv.name)
            .or_else(|| self.registry.get(&inv.name.to_lowercase()))
            .ok_or_else(|| FolioError::UnknownCommand(inv.name.clone()))?;

        if cmd.requires_args() && inv.args.is_empty() {
            return Err(crate::command::usage_error(cmd.as_ref()));
        }
        if let Some(&missing) = cmd.capabilities().iter().find(|c| !self.caps.has(**c)) {
            return Err(FolioError::CapabilityUnavailable(missing));
        }

        self.transition(SessionState::Dispatching);
        log::debug!("Dispatching {} {:?}", cmd.name(), inv.words);
        let mut env = Environment {
            vfs: &mut self.vfs,
            shell: &mut self.shell,
            registry: &self.registry,
            caps: &mut self.caps,
            config: &self.config,
            pipe_input,
        };
        cmd.execute(inv, &mut env)
    }

    fn transition(&mut self, next: SessionState) {
        log::trace!("Session {:?} -> {next:?}", self.state);
        self.state = next;
    }
}

impl fmt::Debug for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terminal")
            .field("cwd", &self.vfs.pwd())
            .field("state", &self.state)
            .field("commands", &self.registry.len())
            .field("history", &self.shell.history.len())
            .finish_non_exhaustive()
    }
}
