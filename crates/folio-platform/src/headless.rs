//! In-memory controllers for running without a UI host.
//!
//! Each one keeps just enough state to answer queries consistently and logs
//! every state change at `info` level.

use folio_types::error::{FolioError, Result};

use crate::controllers::{
    LanguageController, MusicController, NotificationController, SoundController, ThemeController,
    Track, WindowController, WindowInfo, WindowState,
};

// ---------------------------------------------------------------------------
// Windows
// ---------------------------------------------------------------------------

/// Tracks open windows in opening order; the focused one is remembered by name.
#[derive(Debug, Default)]
pub struct HeadlessWindows {
    open: Vec<(String, WindowState)>,
    focused: Option<String>,
}

impl HeadlessWindows {
    fn position(&self, app: &str) -> Result<usize> {
        self.open
            .iter()
            .position(|(name, _)| name == app)
            .ok_or_else(|| FolioError::Command(format!("no open window: {app}")))
    }

    fn set_state(&mut self, app: &str, state: WindowState) -> Result<()> {
        let idx = self.position(app)?;
        self.open[idx].1 = state;
        log::info!("Window {app} -> {state}");
        Ok(())
    }
}

impl WindowController for HeadlessWindows {
    fn open(&mut self, app: &str) -> Result<()> {
        if self.position(app).is_err() {
            self.open.push((app.to_string(), WindowState::Normal));
            log::info!("Opened window {app}");
        }
        self.focused = Some(app.to_string());
        Ok(())
    }

    fn close(&mut self, app: &str) -> Result<()> {
        let idx = self.position(app)?;
        self.open.remove(idx);
        if self.focused.as_deref() == Some(app) {
            self.focused = self.open.last().map(|(name, _)| name.clone());
        }
        log::info!("Closed window {app}");
        Ok(())
    }

    fn minimize(&mut self, app: &str) -> Result<()> {
        self.set_state(app, WindowState::Minimized)?;
        if self.focused.as_deref() == Some(app) {
            self.focused = None;
        }
        Ok(())
    }

    fn maximize(&mut self, app: &str) -> Result<()> {
        self.set_state(app, WindowState::Maximized)?;
        self.focused = Some(app.to_string());
        Ok(())
    }

    fn focus(&mut self, app: &str) -> Result<()> {
        let idx = self.position(app)?;
        if self.open[idx].1 == WindowState::Minimized {
            self.open[idx].1 = WindowState::Normal;
        }
        self.focused = Some(app.to_string());
        log::info!("Focused window {app}");
        Ok(())
    }

    fn windows(&self) -> Result<Vec<WindowInfo>> {
        Ok(self
            .open
            .iter()
            .map(|(app, state)| WindowInfo {
                app: app.clone(),
                state: *state,
                focused: self.focused.as_deref() == Some(app.as_str()),
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Music
// ---------------------------------------------------------------------------

/// A fixed playlist with a cursor.
#[derive(Debug)]
pub struct HeadlessMusic {
    playlist: Vec<Track>,
    current: usize,
    playing: bool,
}

impl HeadlessMusic {
    pub fn new(playlist: Vec<Track>) -> Self {
        Self {
            playlist,
            current: 0,
            playing: false,
        }
    }

    fn current_track(&self) -> Result<Track> {
        self.playlist
            .get(self.current)
            .cloned()
            .ok_or_else(|| FolioError::Command("playlist is empty".to_string()))
    }

    fn step(&mut self, forward: bool) -> Result<Track> {
        let len = self.playlist.len();
        if len == 0 {
            return Err(FolioError::Command("playlist is empty".to_string()));
        }
        self.current = if forward {
            (self.current + 1) % len
        } else {
            (self.current + len - 1) % len
        };
        self.playing = true;
        let track = self.current_track()?;
        log::info!("Now playing {track}");
        Ok(track)
    }
}

impl Default for HeadlessMusic {
    fn default() -> Self {
        let track = |title: &str, artist: &str| Track {
            title: title.to_string(),
            artist: artist.to_string(),
        };
        Self::new(vec![
            track("Lo-fi Morning", "Folio Sessions"),
            track("Night Drive", "Folio Sessions"),
            track("Compile Time", "The Borrow Checkers"),
        ])
    }
}

impl MusicController for HeadlessMusic {
    fn play(&mut self, query: Option<&str>) -> Result<Track> {
        if let Some(query) = query {
            let needle = query.to_lowercase();
            self.current = self
                .playlist
                .iter()
                .position(|t| t.title.to_lowercase().contains(&needle))
                .ok_or_else(|| FolioError::Command(format!("no track matching: {query}")))?;
        }
        let track = self.current_track()?;
        self.playing = true;
        log::info!("Now playing {track}");
        Ok(track)
    }

    fn pause(&mut self) -> Result<()> {
        self.playing = false;
        log::info!("Music paused");
        Ok(())
    }

    fn next(&mut self) -> Result<Track> {
        self.step(true)
    }

    fn previous(&mut self) -> Result<Track> {
        self.step(false)
    }

    fn now_playing(&self) -> Result<Option<Track>> {
        if self.playing {
            self.current_track().map(Some)
        } else {
            Ok(None)
        }
    }

    fn playlist(&self) -> Result<Vec<Track>> {
        Ok(self.playlist.clone())
    }
}

// ---------------------------------------------------------------------------
// Theme / sound / language
// ---------------------------------------------------------------------------

/// Chooses among a fixed set of named choices, e.g. themes or languages.
#[derive(Debug)]
struct Selection {
    choices: Vec<String>,
    current: usize,
    what: &'static str,
}

impl Selection {
    fn new(what: &'static str, choices: &[&str]) -> Self {
        Self {
            choices: choices.iter().map(|c| (*c).to_string()).collect(),
            current: 0,
            what,
        }
    }

    fn current(&self) -> String {
        self.choices.get(self.current).cloned().unwrap_or_default()
    }

    fn select(&mut self, name: &str) -> Result<()> {
        let idx = self
            .choices
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .ok_or_else(|| FolioError::Command(format!("unknown {}: {name}", self.what)))?;
        self.current = idx;
        log::info!("Switched {} to {}", self.what, self.choices[idx]);
        Ok(())
    }
}

#[derive(Debug)]
pub struct HeadlessTheme(Selection);

impl Default for HeadlessTheme {
    fn default() -> Self {
        Self(Selection::new("theme", &["dark", "light", "solarized", "matrix"]))
    }
}

impl ThemeController for HeadlessTheme {
    fn current_theme(&self) -> Result<String> {
        Ok(self.0.current())
    }

    fn themes(&self) -> Result<Vec<String>> {
        Ok(self.0.choices.clone())
    }

    fn set_theme(&mut self, name: &str) -> Result<()> {
        self.0.select(name)
    }
}

#[derive(Debug)]
pub struct HeadlessLanguage(Selection);

impl Default for HeadlessLanguage {
    fn default() -> Self {
        Self(Selection::new("language", &["en", "es", "fr", "de"]))
    }
}

impl LanguageController for HeadlessLanguage {
    fn current_language(&self) -> Result<String> {
        Ok(self.0.current())
    }

    fn languages(&self) -> Result<Vec<String>> {
        Ok(self.0.choices.clone())
    }

    fn set_language(&mut self, code: &str) -> Result<()> {
        self.0.select(code)
    }
}

#[derive(Debug)]
pub struct HeadlessSound {
    enabled: bool,
    volume: u8,
}

impl Default for HeadlessSound {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 70,
        }
    }
}

impl SoundController for HeadlessSound {
    fn is_enabled(&self) -> Result<bool> {
        Ok(self.enabled)
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        self.enabled = enabled;
        log::info!("Sound {}", if enabled { "on" } else { "off" });
        Ok(())
    }

    fn volume(&self) -> Result<u8> {
        Ok(self.volume)
    }

    fn set_volume(&mut self, percent: u8) -> Result<()> {
        self.volume = percent.min(100);
        log::info!("Volume set to {}%", self.volume);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Keeps every notification it was asked to show.
#[derive(Debug, Default)]
pub struct HeadlessNotifications {
    sent: Vec<(String, String)>,
}

impl HeadlessNotifications {
    pub fn sent(&self) -> &[(String, String)] {
        &self.sent
    }
}

impl NotificationController for HeadlessNotifications {
    fn notify(&mut self, title: &str, body: &str) -> Result<()> {
        log::info!("Notification: {title}: {body}");
        self.sent.push((title.to_string(), body.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_lifecycle() {
        let mut wm = HeadlessWindows::default();
        wm.open("about").unwrap();
        wm.open("projects").unwrap();
        wm.open("about").unwrap();
        let list = wm.windows().unwrap();
        assert_eq!(list.len(), 2);
        assert!(list[0].focused);
        assert!(!list[1].focused);

        wm.minimize("about").unwrap();
        assert_eq!(wm.windows().unwrap()[0].state, WindowState::Minimized);
        wm.focus("about").unwrap();
        assert_eq!(wm.windows().unwrap()[0].state, WindowState::Normal);

        wm.close("about").unwrap();
        let list = wm.windows().unwrap();
        assert_eq!(list.len(), 1);
        assert!(list[0].focused);
        assert!(wm.close("about").is_err());
    }

    #[test]
    fn music_cycles_playlist() {
        let mut music = HeadlessMusic::default();
        assert_eq!(music.now_playing().unwrap(), None);
        let first = music.play(None).unwrap();
        assert_eq!(first.title, "Lo-fi Morning");
        assert_eq!(music.previous().unwrap().title, "Compile Time");
        assert_eq!(music.next().unwrap().title, "Lo-fi Morning");
        assert_eq!(music.play(Some("night")).unwrap().title, "Night Drive");
        music.pause().unwrap();
        assert_eq!(music.now_playing().unwrap(), None);
        assert!(music.play(Some("missing")).is_err());
    }

    #[test]
    fn empty_playlist_errors() {
        let mut music = HeadlessMusic::new(Vec::new());
        assert!(music.play(None).is_err());
        assert!(music.next().is_err());
    }

    #[test]
    fn theme_selection_is_case_insensitive() {
        let mut theme = HeadlessTheme::default();
        assert_eq!(theme.current_theme().unwrap(), "dark");
        theme.set_theme("Light").unwrap();
        assert_eq!(theme.current_theme().unwrap(), "light");
        let err = theme.set_theme("neon").unwrap_err();
        assert_eq!(err.to_string(), "unknown theme: neon");
    }

    #[test]
    fn sound_volume_is_clamped() {
        let mut sound = HeadlessSound::default();
        sound.set_volume(250).unwrap();
        assert_eq!(sound.volume().unwrap(), 100);
        sound.set_enabled(false).unwrap();
        assert!(!sound.is_enabled().unwrap());
    }

    #[test]
    fn notifications_are_recorded() {
        let mut n = HeadlessNotifications::default();
        n.notify("Hello", "world").unwrap();
        assert_eq!(n.sent(), &[("Hello".to_string(), "world".to_string())]);
    }
}
