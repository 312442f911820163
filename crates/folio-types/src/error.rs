//! Error types for folio.

use std::fmt;
use std::io;

/// Failure of a virtual filesystem operation.
///
/// Every variant carries the normalized path that caused it. These are
/// returned as values from the VFS and never escalate past one command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VfsError {
    #[error("no such file or directory: {0}")]
    NotFound(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("is a directory: {0}")]
    IsADirectory(String),

    #[error("file exists: {0}")]
    AlreadyExists(String),
}

/// A host capability a command may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Windows,
    Music,
    Theme,
    Sound,
    Language,
    Notifications,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "window manager",
            Self::Music => "music player",
            Self::Theme => "theme controller",
            Self::Sound => "sound controller",
            Self::Language => "language controller",
            Self::Notifications => "notifications",
        };
        f.write_str(name)
    }
}

/// Errors produced while interpreting a command line.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// No command or alias with this name is registered.
    #[error("command not found: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Vfs(#[from] VfsError),

    /// A handler rejected its input or failed while running.
    #[error("{0}")]
    Command(String),

    #[error("syntax error: {0}")]
    Parse(String),

    #[error("capability unavailable: {0}")]
    CapabilityUnavailable(Capability),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
