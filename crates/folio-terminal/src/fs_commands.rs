//! Filesystem commands: pwd, cd, ls, cat, mkdir, touch, stat, find, tree.

use folio_types::error::{FolioError, Result};
use folio_vfs::format::iso_date;
use folio_vfs::{FindOptions, Glob, LsOptions, NodeKind, TouchOutcome};

use crate::command::{Command, CommandOutput, Environment, FlagSpec, usage_error};
use crate::commands::plural;
use crate::parser::Invocation;
use crate::registry::CommandRegistry;

/// Register the filesystem commands.
pub fn register_fs_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(MkdirCmd));
    reg.register(Box::new(TouchCmd));
    reg.register(Box::new(StatCmd));
    reg.register(Box::new(FindCmd));
    reg.register(Box::new(TreeCmd));
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn category(&self) -> &str {
        "filesystem"
    }
    fn execute(&self, _inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::line(env.vfs.pwd()))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change directory"
    }
    fn usage(&self) -> &str {
        "cd [path|-]"
    }
    fn category(&self) -> &str {
        "filesystem"
    }
    fn examples(&self) -> &[&str] {
        &["cd projects", "cd ..", "cd -"]
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        // `-` parses as a positional, not a flag.
        let target = inv.arg(0).unwrap_or("~");
        env.vfs.cd(target)?;
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory contents"
    }
    fn usage(&self) -> &str {
        "ls [-alh] [path...]"
    }
    fn category(&self) -> &str {
        "filesystem"
    }
    fn aliases(&self) -> &[&str] {
        &["dir"]
    }
    fn flags(&self) -> &[FlagSpec] {
        &[
            FlagSpec {
                name: "-a",
                help: "include . and ..",
            },
            FlagSpec {
                name: "-l",
                help: "long listing",
            },
            FlagSpec {
                name: "-h",
                help: "human-readable sizes (with -l)",
            },
        ]
    }
    fn examples(&self) -> &[&str] {
        &["ls", "ls -la /projects"]
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let opts = LsOptions {
            all: inv.has_any_flag(&["a", "all"]),
            long: inv.has_flag("l"),
            human: inv.has_any_flag(&["h", "human-readable"]),
        };

        if inv.args.len() <= 1 {
            return Ok(CommandOutput::Lines(list(env, inv.arg(0), opts)?));
        }

        let mut lines = Vec::new();
        for (i, path) in inv.args.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(format!("{path}:"));
            lines.extend(list(env, Some(path), opts)?);
        }
        Ok(CommandOutput::Lines(lines))
    }
}

fn list(env: &Environment<'_>, path: Option<&str>, opts: LsOptions) -> Result<Vec<String>> {
    let entries = env.vfs.ls(path, opts)?;
    Ok(entries
        .into_iter()
        .map(|e| match e.long {
            Some(long) => long,
            None if e.kind == NodeKind::Folder && e.name != "." && e.name != ".." => {
                format!("{}/", e.name)
            },
            None => e.name,
        })
        .collect())
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Print file contents"
    }
    fn usage(&self) -> &str {
        "cat <file...>"
    }
    fn category(&self) -> &str {
        "filesystem"
    }
    fn requires_args(&self) -> bool {
        true
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut lines = Vec::new();
        for path in &inv.args {
            lines.extend(env.vfs.cat(path)?.lines().map(str::to_string));
        }
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// mkdir
// ---------------------------------------------------------------------------

struct MkdirCmd;
impl Command for MkdirCmd {
    fn name(&self) -> &str {
        "mkdir"
    }
    fn description(&self) -> &str {
        "Create a directory"
    }
    fn usage(&self) -> &str {
        "mkdir [-p] <path...>"
    }
    fn category(&self) -> &str {
        "filesystem"
    }
    fn flags(&self) -> &[FlagSpec] {
        &[FlagSpec {
            name: "-p",
            help: "create missing parents",
        }]
    }
    fn requires_args(&self) -> bool {
        true
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let parents = inv.has_any_flag(&["p", "parents"]);
        for path in &inv.args {
            env.vfs.mkdir(path, parents)?;
        }
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// touch
// ---------------------------------------------------------------------------

struct TouchCmd;
impl Command for TouchCmd {
    fn name(&self) -> &str {
        "touch"
    }
    fn description(&self) -> &str {
        "Create a file or update its timestamp"
    }
    fn usage(&self) -> &str {
        "touch <file...>"
    }
    fn category(&self) -> &str {
        "filesystem"
    }
    fn requires_args(&self) -> bool {
        true
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut lines = Vec::with_capacity(inv.args.len());
        for path in &inv.args {
            let outcome = match env.vfs.touch(path)? {
                TouchOutcome::Created => "created",
                TouchOutcome::Updated => "updated",
            };
            log::debug!("touch: {outcome} {path}");
            lines.push(format!("{path}: {outcome}"));
        }
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// stat
// ---------------------------------------------------------------------------

struct StatCmd;
impl Command for StatCmd {
    fn name(&self) -> &str {
        "stat"
    }
    fn description(&self) -> &str {
        "Show file metadata"
    }
    fn usage(&self) -> &str {
        "stat <path>"
    }
    fn category(&self) -> &str {
        "filesystem"
    }
    fn requires_args(&self) -> bool {
        true
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let path = inv.arg(0).ok_or_else(|| usage_error(self))?;
        let info = env.vfs.stat(path)?;
        let kind = match info.kind {
            NodeKind::File => "file",
            NodeKind::Folder => "folder",
        };
        let when = |t: Option<u64>| t.map_or_else(|| "-".to_string(), iso_date);
        Ok(CommandOutput::Lines(vec![
            format!("  File: {}", info.path),
            format!("  Type: {kind} ({})", info.subtype),
            format!("  Size: {}", info.size),
            format!("Created: {}", when(info.created)),
            format!("Modified: {}", when(info.modified)),
        ]))
    }
}

// ---------------------------------------------------------------------------
// find
// ---------------------------------------------------------------------------

struct FindCmd;
impl Command for FindCmd {
    fn name(&self) -> &str {
        "find"
    }
    fn description(&self) -> &str {
        "Search for files by name or type"
    }
    fn usage(&self) -> &str {
        "find [path] [-name PATTERN] [-type f|d]"
    }
    fn category(&self) -> &str {
        "filesystem"
    }
    fn examples(&self) -> &[&str] {
        &["find . -name \"*.md\"", "find /projects -type d"]
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut start = None;
        let mut opts = FindOptions::default();

        // `-name` and `-type` take a value, so walk the words in order.
        let mut words = inv.words.iter();
        while let Some(word) = words.next() {
            match word.as_str() {
                "-name" => {
                    let pattern = words.next().ok_or_else(|| usage_error(self))?;
                    let glob = Glob::new(pattern).map_err(|e| {
                        FolioError::Command(format!("find: bad pattern {pattern}: {e}"))
                    })?;
                    opts.name = Some(glob);
                },
                "-type" => {
                    opts.kind = match words.next().map(String::as_str) {
                        Some("f") => Some(NodeKind::File),
                        Some("d") => Some(NodeKind::Folder),
                        _ => return Err(usage_error(self)),
                    };
                },
                w if w.starts_with('-') => return Err(usage_error(self)),
                w if start.is_none() => start = Some(w),
                _ => return Err(usage_error(self)),
            }
        }

        Ok(CommandOutput::Lines(env.vfs.find(start.unwrap_or("."), &opts)?))
    }
}

// ---------------------------------------------------------------------------
// tree
// ---------------------------------------------------------------------------

struct TreeCmd;
impl Command for TreeCmd {
    fn name(&self) -> &str {
        "tree"
    }
    fn description(&self) -> &str {
        "Display directory tree"
    }
    fn usage(&self) -> &str {
        "tree [-L depth] [path]"
    }
    fn category(&self) -> &str {
        "filesystem"
    }
    fn flags(&self) -> &[FlagSpec] {
        &[FlagSpec {
            name: "-L N",
            help: "descend at most N levels",
        }]
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut depth = env.config.tree_depth;
        let mut start = None;
        let mut words = inv.words.iter();
        while let Some(word) = words.next() {
            match word.as_str() {
                "-L" => {
                    depth = crate::commands::parse_count("tree", words.next().map(String::as_str))?;
                },
                w if w.starts_with('-') => return Err(usage_error(self)),
                w => start = Some(w),
            }
        }

        let path = start.unwrap_or(".");
        let report = env.vfs.tree(path, depth)?;
        let mut lines = Vec::with_capacity(report.lines.len() + 3);
        lines.push(path.to_string());
        lines.extend(report.lines);
        lines.push(String::new());
        lines.push(format!(
            "{}, {}",
            plural(report.folders, "directory", "directories"),
            plural(report.files, "file", "files")
        ));
        Ok(CommandOutput::Lines(lines))
    }
}
