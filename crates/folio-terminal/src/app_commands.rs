//! Commands that drive the host through its capabilities: window actions,
//! windows, music, theme, sound, lang, notify.
//!
//! Each one declares what it needs in `capabilities()`, so the engine has
//! already rejected the call when the host lacks it. The accessors on
//! `Capabilities` still return `Result` and are propagated with `?`.

use folio_types::error::{Capability, FolioError, Result};

use crate::command::{Command, CommandOutput, Environment, usage_error};
use crate::parser::Invocation;
use crate::registry::CommandRegistry;

/// Register the host commands.
pub fn register_app_commands(reg: &mut CommandRegistry) {
    for action in [
        WindowAction::Open,
        WindowAction::Close,
        WindowAction::Minimize,
        WindowAction::Maximize,
        WindowAction::Focus,
    ] {
        reg.register(Box::new(WindowCmd(action)));
    }
    reg.register(Box::new(WindowsCmd));
    reg.register(Box::new(MusicCmd));
    reg.register(Box::new(ThemeCmd));
    reg.register(Box::new(SoundCmd));
    reg.register(Box::new(LangCmd));
    reg.register(Box::new(NotifyCmd));
}

// ---------------------------------------------------------------------------
// open / close / minimize / maximize / focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum WindowAction {
    Open,
    Close,
    Minimize,
    Maximize,
    Focus,
}

struct WindowCmd(WindowAction);
impl Command for WindowCmd {
    fn name(&self) -> &str {
        match self.0 {
            WindowAction::Open => "open",
            WindowAction::Close => "close",
            WindowAction::Minimize => "minimize",
            WindowAction::Maximize => "maximize",
            WindowAction::Focus => "focus",
        }
    }
    fn description(&self) -> &str {
        match self.0 {
            WindowAction::Open => "Open an application window",
            WindowAction::Close => "Close an application window",
            WindowAction::Minimize => "Minimize a window",
            WindowAction::Maximize => "Maximize a window",
            WindowAction::Focus => "Bring a window to the front",
        }
    }
    fn usage(&self) -> &str {
        match self.0 {
            WindowAction::Open => "open <app>",
            WindowAction::Close => "close <app>",
            WindowAction::Minimize => "minimize <app>",
            WindowAction::Maximize => "maximize <app>",
            WindowAction::Focus => "focus <app>",
        }
    }
    fn category(&self) -> &str {
        "host"
    }
    fn requires_args(&self) -> bool {
        true
    }
    fn capabilities(&self) -> &[Capability] {
        &[Capability::Windows]
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let app = inv.arg(0).ok_or_else(|| usage_error(self))?;
        let windows = env.caps.windows()?;
        let verb = match self.0 {
            WindowAction::Open => {
                windows.open(app)?;
                "Opened"
            },
            WindowAction::Close => {
                windows.close(app)?;
                "Closed"
            },
            WindowAction::Minimize => {
                windows.minimize(app)?;
                "Minimized"
            },
            WindowAction::Maximize => {
                windows.maximize(app)?;
                "Maximized"
            },
            WindowAction::Focus => {
                windows.focus(app)?;
                "Focused"
            },
        };
        Ok(CommandOutput::line(format!("{verb} {app}")))
    }
}

struct WindowsCmd;
impl Command for WindowsCmd {
    fn name(&self) -> &str {
        "windows"
    }
    fn description(&self) -> &str {
        "List open windows"
    }
    fn usage(&self) -> &str {
        "windows"
    }
    fn category(&self) -> &str {
        "host"
    }
    fn capabilities(&self) -> &[Capability] {
        &[Capability::Windows]
    }
    fn execute(&self, _inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let windows = env.caps.windows()?.windows()?;
        if windows.is_empty() {
            return Ok(CommandOutput::line("No open windows"));
        }
        Ok(CommandOutput::Lines(
            windows
                .iter()
                .map(|w| {
                    let marker = if w.focused { "*" } else { " " };
                    format!("{marker} {:<16} {}", w.app, w.state)
                })
                .collect(),
        ))
    }
}

// ---------------------------------------------------------------------------
// music
// ---------------------------------------------------------------------------

struct MusicCmd;
impl Command for MusicCmd {
    fn name(&self) -> &str {
        "music"
    }
    fn description(&self) -> &str {
        "Control the music player"
    }
    fn usage(&self) -> &str {
        "music [play [query]|pause|next|prev|list|status]"
    }
    fn category(&self) -> &str {
        "host"
    }
    fn capabilities(&self) -> &[Capability] {
        &[Capability::Music]
    }
    fn examples(&self) -> &[&str] {
        &["music play night", "music next", "music list"]
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let music = env.caps.music()?;
        match inv.arg(0).unwrap_or("status") {
            "play" => {
                let query = (inv.args.len() > 1).then(|| inv.args[1..].join(" "));
                let track = music.play(query.as_deref())?;
                Ok(CommandOutput::line(format!("Playing: {track}")))
            },
            "pause" | "stop" => {
                music.pause()?;
                Ok(CommandOutput::line("Paused"))
            },
            "next" => Ok(CommandOutput::line(format!("Playing: {}", music.next()?))),
            "prev" | "previous" => {
                Ok(CommandOutput::line(format!("Playing: {}", music.previous()?)))
            },
            "list" => {
                let current = music.now_playing()?;
                Ok(CommandOutput::Lines(
                    music
                        .playlist()?
                        .iter()
                        .enumerate()
                        .map(|(i, t)| {
                            let marker = if current.as_ref() == Some(t) { ">" } else { " " };
                            format!("{marker} {:>2}. {t}", i + 1)
                        })
                        .collect(),
                ))
            },
            "status" => Ok(CommandOutput::line(match music.now_playing()? {
                Some(track) => format!("Playing: {track}"),
                None => "Nothing playing".to_string(),
            })),
            _ => Err(usage_error(self)),
        }
    }
}

// ---------------------------------------------------------------------------
// theme
// ---------------------------------------------------------------------------

struct ThemeCmd;
impl Command for ThemeCmd {
    fn name(&self) -> &str {
        "theme"
    }
    fn description(&self) -> &str {
        "Show, list or switch the color theme"
    }
    fn usage(&self) -> &str {
        "theme [list|name]"
    }
    fn category(&self) -> &str {
        "host"
    }
    fn capabilities(&self) -> &[Capability] {
        &[Capability::Theme]
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let theme = env.caps.theme()?;
        match inv.arg(0) {
            None => Ok(CommandOutput::line(format!(
                "Current theme: {}",
                theme.current_theme()?
            ))),
            Some("list") => {
                let current = theme.current_theme()?;
                Ok(CommandOutput::Lines(marked(theme.themes()?, &current)))
            },
            Some(name) => {
                theme.set_theme(name)?;
                Ok(CommandOutput::line(format!("Theme set to {}", theme.current_theme()?)))
            },
        }
    }
}

/// One line per choice, the current one starred.
fn marked(choices: Vec<String>, current: &str) -> Vec<String> {
    choices
        .into_iter()
        .map(|c| {
            let marker = if c == current { "*" } else { " " };
            format!("{marker} {c}")
        })
        .collect()
}

// ---------------------------------------------------------------------------
// sound
// ---------------------------------------------------------------------------

struct SoundCmd;
impl Command for SoundCmd {
    fn name(&self) -> &str {
        "sound"
    }
    fn description(&self) -> &str {
        "Toggle sound or set the volume"
    }
    fn usage(&self) -> &str {
        "sound [on|off|volume N|status]"
    }
    fn category(&self) -> &str {
        "host"
    }
    fn capabilities(&self) -> &[Capability] {
        &[Capability::Sound]
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let sound = env.caps.sound()?;
        match inv.arg(0).unwrap_or("status") {
            "on" => sound.set_enabled(true)?,
            "off" | "mute" => sound.set_enabled(false)?,
            "volume" | "vol" => {
                let value = inv.arg(1).ok_or_else(|| usage_error(self))?;
                let percent: u8 = value
                    .trim_end_matches('%')
                    .parse()
                    .map_err(|_| FolioError::Command(format!("sound: invalid volume: {value}")))?;
                sound.set_volume(percent)?;
            },
            "status" => {},
            _ => return Err(usage_error(self)),
        }
        let state = if sound.is_enabled()? { "on" } else { "off" };
        Ok(CommandOutput::line(format!(
            "Sound {state}, volume {}%",
            sound.volume()?
        )))
    }
}

// ---------------------------------------------------------------------------
// lang
// ---------------------------------------------------------------------------

struct LangCmd;
impl Command for LangCmd {
    fn name(&self) -> &str {
        "lang"
    }
    fn description(&self) -> &str {
        "Show, list or switch the interface language"
    }
    fn usage(&self) -> &str {
        "lang [list|code]"
    }
    fn category(&self) -> &str {
        "host"
    }
    fn capabilities(&self) -> &[Capability] {
        &[Capability::Language]
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let language = env.caps.language()?;
        match inv.arg(0) {
            None => Ok(CommandOutput::line(format!(
                "Current language: {}",
                language.current_language()?
            ))),
            Some("list") => {
                let current = language.current_language()?;
                Ok(CommandOutput::Lines(marked(language.languages()?, &current)))
            },
            Some(code) => {
                language.set_language(code)?;
                Ok(CommandOutput::line(format!(
                    "Language set to {}",
                    language.current_language()?
                )))
            },
        }
    }
}

// ---------------------------------------------------------------------------
// notify
// ---------------------------------------------------------------------------

struct NotifyCmd;
impl Command for NotifyCmd {
    fn name(&self) -> &str {
        "notify"
    }
    fn description(&self) -> &str {
        "Show a desktop notification"
    }
    fn usage(&self) -> &str {
        "notify <title> [body...]"
    }
    fn category(&self) -> &str {
        "host"
    }
    fn requires_args(&self) -> bool {
        true
    }
    fn capabilities(&self) -> &[Capability] {
        &[Capability::Notifications]
    }
    fn execute(&self, inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let title = inv.arg(0).ok_or_else(|| usage_error(self))?;
        let body = inv.args[1..].join(" ");
        env.caps.notifications()?.notify(title, &body)?;
        Ok(CommandOutput::None)
    }
}
