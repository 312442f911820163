//! Command interpreter and terminal session.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name and alias. The engine expands
//! and parses each input line, resolves every command it names, and
//! dispatches `execute()` with an `Environment` over the session's state.

mod app_commands;
mod command;
mod commands;
mod expand;
mod fs_commands;
pub mod parser;
mod registry;
mod shell_commands;
mod terminal;
mod text_commands;
pub mod tokenizer;

/// A single executable command trait.
pub use command::Command;
/// Output produced by a command (lines or signals).
pub use command::CommandOutput;
/// Shared mutable environment passed to every command.
pub use command::Environment;
/// Flag schema entry shown by `help`.
pub use command::FlagSpec;
/// Environment variables, aliases and history of a session.
pub use command::ShellState;
/// `usage: ...` error for a command, as the engine renders it.
pub use command::usage_error;
/// Register all built-in commands (filesystem, shell, text, host) into a registry.
pub use commands::register_builtins;
pub use expand::{expand_aliases, expand_history, expand_variables};
pub use parser::{
    ChainSegment, FlagValue, Invocation, ParseError, ParsedCommand, Separator, parse_line,
};
/// Registry of available commands.
pub use registry::CommandRegistry;
/// The execution engine and its rendered output.
pub use terminal::{HistoryDirection, OutputLine, SessionState, Terminal};
pub use tokenizer::tokenize;
