//! Built-in command registration and helpers shared by the command modules.

use folio_types::error::{FolioError, Result};

use crate::command::Environment;
use crate::registry::CommandRegistry;

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    crate::fs_commands::register_fs_commands(reg);
    crate::shell_commands::register_shell_commands(reg);
    crate::text_commands::register_text_commands(reg);
    crate::app_commands::register_app_commands(reg);
}

/// Text a filter command works on: the named file, else the pipe input.
pub(crate) fn read_input(
    file: Option<&str>,
    env: &Environment<'_>,
    cmd: &str,
) -> Result<Vec<String>> {
    match file {
        Some(path) => Ok(env.vfs.cat(path)?.lines().map(str::to_string).collect()),
        None => env.pipe_input.clone().ok_or_else(|| {
            FolioError::Command(format!("{cmd}: no input (give a file or pipe into it)"))
        }),
    }
}

/// Parse a count argument such as the `5` in `head -n 5`.
pub(crate) fn parse_count(cmd: &str, value: Option<&str>) -> Result<usize> {
    let value = value.ok_or_else(|| FolioError::Command(format!("{cmd}: missing count")))?;
    value
        .parse()
        .map_err(|_| FolioError::Command(format!("{cmd}: invalid count: {value}")))
}

/// `1 file`, `2 files`.
pub(crate) fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}
