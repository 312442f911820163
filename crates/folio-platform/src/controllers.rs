//! Capability traits implemented by the hosting application.

use folio_types::error::Result;

// ---------------------------------------------------------------------------
// Window management
// ---------------------------------------------------------------------------

/// Display state of an application window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Normal,
    Minimized,
    Maximized,
}

impl std::fmt::Display for WindowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Minimized => write!(f, "minimized"),
            Self::Maximized => write!(f, "maximized"),
        }
    }
}

/// Summary of one open window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    /// Application identifier, e.g. `projects`.
    pub app: String,
    pub state: WindowState,
    pub focused: bool,
}

/// Application window lifecycle.
pub trait WindowController {
    /// Open `app`, or focus it if it is already open.
    fn open(&mut self, app: &str) -> Result<()>;

    fn close(&mut self, app: &str) -> Result<()>;

    fn minimize(&mut self, app: &str) -> Result<()>;

    fn maximize(&mut self, app: &str) -> Result<()>;

    fn focus(&mut self, app: &str) -> Result<()>;

    /// Open windows, oldest first.
    fn windows(&self) -> Result<Vec<WindowInfo>>;
}

// ---------------------------------------------------------------------------
// Music
// ---------------------------------------------------------------------------

/// A playable track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

/// Background music player.
pub trait MusicController {
    /// Resume playback, or start the track whose title matches `query`.
    fn play(&mut self, query: Option<&str>) -> Result<Track>;

    fn pause(&mut self) -> Result<()>;

    fn next(&mut self) -> Result<Track>;

    fn previous(&mut self) -> Result<Track>;

    /// The current track while playing.
    fn now_playing(&self) -> Result<Option<Track>>;

    fn playlist(&self) -> Result<Vec<Track>>;
}

// ---------------------------------------------------------------------------
// Appearance and locale
// ---------------------------------------------------------------------------

/// Visual theme selection.
pub trait ThemeController {
    fn current_theme(&self) -> Result<String>;

    fn themes(&self) -> Result<Vec<String>>;

    fn set_theme(&mut self, name: &str) -> Result<()>;
}

/// UI sound effects.
pub trait SoundController {
    fn is_enabled(&self) -> Result<bool>;

    fn set_enabled(&mut self, enabled: bool) -> Result<()>;

    /// Volume in percent (0-100).
    fn volume(&self) -> Result<u8>;

    fn set_volume(&mut self, percent: u8) -> Result<()>;
}

/// Interface language.
pub trait LanguageController {
    fn current_language(&self) -> Result<String>;

    fn languages(&self) -> Result<Vec<String>>;

    fn set_language(&mut self, code: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Toast-style user notifications.
pub trait NotificationController {
    fn notify(&mut self, title: &str, body: &str) -> Result<()>;
}
