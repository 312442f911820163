//! The optional-capability bundle injected into a terminal session.

use folio_types::error::{Capability, FolioError, Result};

use crate::controllers::{
    LanguageController, MusicController, NotificationController, SoundController, ThemeController,
    WindowController,
};
use crate::headless::{
    HeadlessLanguage, HeadlessMusic, HeadlessNotifications, HeadlessSound, HeadlessTheme,
    HeadlessWindows,
};

/// Controllers supplied by the host. Any of them may be absent.
#[derive(Default)]
pub struct Capabilities {
    pub windows: Option<Box<dyn WindowController>>,
    pub music: Option<Box<dyn MusicController>>,
    pub theme: Option<Box<dyn ThemeController>>,
    pub sound: Option<Box<dyn SoundController>>,
    pub language: Option<Box<dyn LanguageController>>,
    pub notifications: Option<Box<dyn NotificationController>>,
}

impl Capabilities {
    /// No host controllers at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every capability backed by an in-memory implementation that logs
    /// instead of driving a UI.
    pub fn headless() -> Self {
        Self {
            windows: Some(Box::new(HeadlessWindows::default())),
            music: Some(Box::new(HeadlessMusic::default())),
            theme: Some(Box::new(HeadlessTheme::default())),
            sound: Some(Box::new(HeadlessSound::default())),
            language: Some(Box::new(HeadlessLanguage::default())),
            notifications: Some(Box::new(HeadlessNotifications::default())),
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Windows => self.windows.is_some(),
            Capability::Music => self.music.is_some(),
            Capability::Theme => self.theme.is_some(),
            Capability::Sound => self.sound.is_some(),
            Capability::Language => self.language.is_some(),
            Capability::Notifications => self.notifications.is_some(),
        }
    }

    pub fn windows(&mut self) -> Result<&mut dyn WindowController> {
        match self.windows.as_deref_mut() {
            Some(controller) => Ok(controller),
            None => Err(FolioError::CapabilityUnavailable(Capability::Windows)),
        }
    }

    pub fn music(&mut self) -> Result<&mut dyn MusicController> {
        match self.music.as_deref_mut() {
            Some(controller) => Ok(controller),
            None => Err(FolioError::CapabilityUnavailable(Capability::Music)),
        }
    }

    pub fn theme(&mut self) -> Result<&mut dyn ThemeController> {
        match self.theme.as_deref_mut() {
            Some(controller) => Ok(controller),
            None => Err(FolioError::CapabilityUnavailable(Capability::Theme)),
        }
    }

    pub fn sound(&mut self) -> Result<&mut dyn SoundController> {
        match self.sound.as_deref_mut() {
            Some(controller) => Ok(controller),
            None => Err(FolioError::CapabilityUnavailable(Capability::Sound)),
        }
    }

    pub fn language(&mut self) -> Result<&mut dyn LanguageController> {
        match self.language.as_deref_mut() {
            Some(controller) => Ok(controller),
            None => Err(FolioError::CapabilityUnavailable(Capability::Language)),
        }
    }

    pub fn notifications(&mut self) -> Result<&mut dyn NotificationController> {
        match self.notifications.as_deref_mut() {
            Some(controller) => Ok(controller),
            None => Err(FolioError::CapabilityUnavailable(Capability::Notifications)),
        }
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("windows", &self.windows.is_some())
            .field("music", &self.music.is_some())
            .field("theme", &self.theme.is_some())
            .field("sound", &self.sound.is_some())
            .field("language", &self.language.is_some())
            .field("notifications", &self.notifications.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_reports_unavailable() {
        let mut caps = Capabilities::none();
        assert!(!caps.has(Capability::Music));
        let err = caps.music().err().unwrap();
        assert!(matches!(
            err,
            FolioError::CapabilityUnavailable(Capability::Music)
        ));
        assert_eq!(err.to_string(), "capability unavailable: music player");
    }

    #[test]
    fn headless_has_everything() {
        let mut caps = Capabilities::headless();
        for cap in [
            Capability::Windows,
            Capability::Music,
            Capability::Theme,
            Capability::Sound,
            Capability::Language,
            Capability::Notifications,
        ] {
            assert!(caps.has(cap), "{cap} missing");
        }
        caps.windows().unwrap().open("projects").unwrap();
        assert_eq!(caps.windows().unwrap().windows().unwrap().len(), 1);
    }

    #[test]
    fn partial_bundle() {
        let mut caps = Capabilities {
            theme: Some(Box::new(HeadlessTheme::default())),
            ..Capabilities::none()
        };
        assert!(caps.has(Capability::Theme));
        assert!(!caps.has(Capability::Windows));
        assert!(caps.theme().is_ok());
        assert!(caps.windows().is_err());
    }
}
