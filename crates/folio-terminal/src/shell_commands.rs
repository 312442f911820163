//! Shell commands: echo, clear, help, history, alias, unalias, export,
//! unset, env, which.

use folio_types::error::{FolioError, Result};

use crate::command::{Command, CommandOutput, Environment, usage_error};
use crate::parser::Invocation;
use crate::registry::CommandRegistry;

/// Register the shell commands.
pub fn register_shell_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(AliasCmd));
    reg.register(Box::new(UnaliasCmd));
    reg.register(Box::new(ExportCmd));
    reg.register(Box::new(UnsetCmd));
    reg.register(Box::new(EnvCmd));
    reg.register(Box::new(WhichCmd));
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print text"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        if inv.words.is_empty()
            && let Some(input) = env.pipe_input.take()
        {
            return Ok(CommandOutput::Lines(input));
        }
        Ok(CommandOutput::text(inv.words.join(" ")))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn aliases(&self) -> &[&str] {
        &["cls"]
    }
    fn execute(&self, _inv: &Invocation, _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List commands or show help for one"
    }
    fn usage(&self) -> &str {
        "help [command]"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn aliases(&self) -> &[&str] {
        &["man"]
    }
    fn examples(&self) -> &[&str] {
        &["help", "help ls"]
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        match inv.arg(0) {
            None => Ok(CommandOutput::Lines(overview(env.registry))),
            Some(name) => {
                let cmd = env
                    .registry
                    .get(name)
                    .ok_or_else(|| FolioError::UnknownCommand(name.to_string()))?;
                Ok(CommandOutput::Lines(detail(cmd.as_ref())))
            },
        }
    }
}

fn overview(registry: &CommandRegistry) -> Vec<String> {
    let mut lines = Vec::new();
    for category in registry.categories() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{category}:"));
        for cmd in registry.commands_by_category(category) {
            lines.push(format!("  {:<10} {}", cmd.name(), cmd.description()));
        }
    }
    lines.push(String::new());
    lines.push("Type 'help <command>' for details.".to_string());
    lines
}

fn detail(cmd: &dyn Command) -> Vec<String> {
    let mut lines = vec![
        format!("{} - {}", cmd.name(), cmd.description()),
        format!("usage: {}", cmd.usage()),
    ];
    if !cmd.aliases().is_empty() {
        lines.push(format!("aliases: {}", cmd.aliases().join(", ")));
    }
    if !cmd.flags().is_empty() {
        lines.push("flags:".to_string());
        for flag in cmd.flags() {
            lines.push(format!("  {:<8} {}", flag.name, flag.help));
        }
    }
    if !cmd.examples().is_empty() {
        lines.push("examples:".to_string());
        lines.extend(cmd.examples().iter().map(|e| format!("  {e}")));
    }
    lines
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        // The log is append-only; there is nothing to clear or edit.
        if !inv.words.is_empty() {
            return Err(usage_error(self));
        }
        Ok(CommandOutput::Lines(
            env.shell
                .history
                .iter()
                .enumerate()
                .map(|(i, entry)| format!("{:>4}  {entry}", i + 1))
                .collect(),
        ))
    }
}

// ---------------------------------------------------------------------------
// alias / unalias
// ---------------------------------------------------------------------------

struct AliasCmd;
impl Command for AliasCmd {
    fn name(&self) -> &str {
        "alias"
    }
    fn description(&self) -> &str {
        "Define or list aliases"
    }
    fn usage(&self) -> &str {
        "alias [name[=value]]"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn examples(&self) -> &[&str] {
        &["alias ll='ls -la'", "alias"]
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        // The value may itself look like flags (`ls -la`), so rejoin words.
        let spec = inv.words.join(" ");
        if spec.is_empty() {
            return Ok(CommandOutput::Lines(
                env.shell
                    .aliases
                    .iter()
                    .map(|(name, value)| format!("alias {name}='{value}'"))
                    .collect(),
            ));
        }
        match spec.split_once('=') {
            Some((name, value)) => {
                let name = name.trim();
                if name.is_empty() || name.contains(char::is_whitespace) {
                    return Err(usage_error(self));
                }
                log::debug!("alias {name} -> {value}");
                env.shell.aliases.insert(name.to_string(), value.to_string());
                Ok(CommandOutput::None)
            },
            None => match env.shell.aliases.get(&spec) {
                Some(value) => Ok(CommandOutput::line(format!("alias {spec}='{value}'"))),
                None => Err(FolioError::Command(format!("alias: {spec}: not found"))),
            },
        }
    }
}

struct UnaliasCmd;
impl Command for UnaliasCmd {
    fn name(&self) -> &str {
        "unalias"
    }
    fn description(&self) -> &str {
        "Remove an alias"
    }
    fn usage(&self) -> &str {
        "unalias <name...>"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn requires_args(&self) -> bool {
        true
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        for name in &inv.args {
            if env.shell.aliases.remove(name).is_none() {
                return Err(FolioError::Command(format!("unalias: {name}: not found")));
            }
        }
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// export / unset / env
// ---------------------------------------------------------------------------

struct ExportCmd;
impl Command for ExportCmd {
    fn name(&self) -> &str {
        "export"
    }
    fn description(&self) -> &str {
        "Set an environment variable"
    }
    fn usage(&self) -> &str {
        "export NAME=value"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        if inv.words.is_empty() {
            return Ok(CommandOutput::Lines(env_lines(env)));
        }
        let spec = inv.words.join(" ");
        let (name, value) = spec.split_once('=').ok_or_else(|| usage_error(self))?;
        let valid = !name.is_empty()
            && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');
        if !valid {
            return Err(FolioError::Command(format!(
                "export: not a valid identifier: {name}"
            )));
        }
        env.shell.env.insert(name.to_string(), value.to_string());
        Ok(CommandOutput::None)
    }
}

struct UnsetCmd;
impl Command for UnsetCmd {
    fn name(&self) -> &str {
        "unset"
    }
    fn description(&self) -> &str {
        "Remove an environment variable"
    }
    fn usage(&self) -> &str {
        "unset <name...>"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn requires_args(&self) -> bool {
        true
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        for name in &inv.args {
            env.shell.env.remove(name);
        }
        Ok(CommandOutput::None)
    }
}

struct EnvCmd;
impl Command for EnvCmd {
    fn name(&self) -> &str {
        "env"
    }
    fn description(&self) -> &str {
        "List environment variables"
    }
    fn usage(&self) -> &str {
        "env"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, _inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Lines(env_lines(env)))
    }
}

fn env_lines(env: &Environment<'_>) -> Vec<String> {
    env.shell
        .env
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect()
}

// ---------------------------------------------------------------------------
// which
// ---------------------------------------------------------------------------

struct WhichCmd;
impl Command for WhichCmd {
    fn name(&self) -> &str {
        "which"
    }
    fn description(&self) -> &str {
        "Show how a name would be resolved"
    }
    fn usage(&self) -> &str {
        "which <name...>"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn requires_args(&self) -> bool {
        true
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut lines = Vec::new();
        for name in &inv.args {
            if let Some(value) = env.shell.aliases.get(name) {
                lines.push(format!("{name}: aliased to '{value}'"));
            } else if let Some(cmd) = env.registry.get(name) {
                if env.registry.is_alias(name) {
                    lines.push(format!("{name}: built-in command (alias of {})", cmd.name()));
                } else {
                    lines.push(format!("{name}: built-in command"));
                }
            } else {
                lines.push(format!("which: no {name}"));
            }
        }
        Ok(CommandOutput::Lines(lines))
    }
}

#[cfg(test)]
mod tests {
    use folio_platform::Capabilities;
    use folio_types::config::TerminalConfig;
    use folio_vfs::VirtualFs;

    use super::*;
    use crate::command::ShellState;

    struct Fixture {
        reg: CommandRegistry,
        shell: ShellState,
        fs: VirtualFs,
        caps: Capabilities,
        config: TerminalConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let mut reg = CommandRegistry::new();
            crate::register_builtins(&mut reg);
            Self {
                reg,
                shell: ShellState::default(),
                fs: VirtualFs::empty(),
                caps: Capabilities::none(),
                config: TerminalConfig::default(),
            }
        }

        fn run(&mut self, line: &str) -> Result<CommandOutput> {
            let inv = Invocation::from_raw(line).unwrap();
            let cmd = self.reg.get(&inv.name).unwrap();
            let mut env = Environment {
                vfs: &mut self.fs,
                shell: &mut self.shell,
                registry: &self.reg,
                caps: &mut self.caps,
                config: &self.config,
                pipe_input: None,
            };
            cmd.execute(&inv, &mut env)
        }

        fn lines(&mut self, line: &str) -> Vec<String> {
            self.run(line).unwrap().into_lines()
        }
    }

    #[test]
    fn echo_joins_words() {
        let mut fx = Fixture::new();
        assert_eq!(fx.lines("echo \"a  b\" c -n"), vec!["a  b c -n"]);
        assert!(fx.lines("echo").is_empty());
    }

    #[test]
    fn help_groups_by_category() {
        let mut fx = Fixture::new();
        let out = fx.lines("help");
        assert_eq!(out[0], "filesystem:");
        assert!(out.iter().any(|l| l == "shell:"));
        assert!(out.iter().any(|l| l.trim_start().starts_with("ls ")));
        assert!(!out.iter().any(|l| l.trim_start().starts_with("dir ")));
    }

    #[test]
    fn help_for_one_command() {
        let mut fx = Fixture::new();
        let out = fx.lines("help dir");
        assert_eq!(out[0], "ls - List directory contents");
        assert_eq!(out[1], "usage: ls [-alh] [path...]");
        assert_eq!(out[2], "aliases: dir");
        assert!(matches!(
            fx.run("help nope"),
            Err(FolioError::UnknownCommand(_))
        ));
    }

    #[test]
    fn alias_define_show_remove() {
        let mut fx = Fixture::new();
        fx.run("alias ll='ls -la'").unwrap();
        assert_eq!(fx.shell.aliases.get("ll").map(String::as_str), Some("ls -la"));
        assert_eq!(fx.lines("alias ll"), vec!["alias ll='ls -la'"]);
        assert_eq!(fx.lines("alias"), vec!["alias ll='ls -la'"]);
        fx.run("unalias ll").unwrap();
        assert!(fx.run("alias ll").is_err());
        assert!(fx.run("unalias ll").is_err());
    }

    #[test]
    fn export_and_unset() {
        let mut fx = Fixture::new();
        fx.run("export EDITOR=vim").unwrap();
        assert_eq!(fx.lines("env"), vec!["EDITOR=vim"]);
        assert!(fx.run("export EDITOR").is_err());
        assert!(fx.run("export 1-x=y").is_err());
        fx.run("unset EDITOR").unwrap();
        assert!(fx.lines("env").is_empty());
    }

    #[test]
    fn history_lists_and_never_shrinks() {
        let mut fx = Fixture::new();
        fx.shell.history = vec!["ls".into(), "pwd".into()];
        assert_eq!(fx.lines("history"), vec!["   1  ls", "   2  pwd"]);
        assert!(fx.run("history -c").is_err());
        assert!(fx.run("history 1").is_err());
        assert_eq!(fx.shell.history, vec!["ls", "pwd"]);
    }

    #[test]
    fn which_resolves_names() {
        let mut fx = Fixture::new();
        fx.shell.aliases.insert("ll".into(), "ls -la".into());
        assert_eq!(
            fx.lines("which ll cls pwd nope"),
            vec![
                "ll: aliased to 'ls -la'",
                "cls: built-in command (alias of clear)",
                "pwd: built-in command",
                "which: no nope",
            ]
        );
    }

    #[test]
    fn clear_signals() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("cls").unwrap(), CommandOutput::Clear);
    }
}
