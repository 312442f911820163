//! Host capabilities for folio.
//!
//! The hosting application hands the terminal an optional set of
//! controllers. Commands declare which ones they need and the engine
//! refuses to run them when a controller is absent.

pub mod capabilities;
pub mod controllers;
pub mod headless;

pub use capabilities::Capabilities;
pub use controllers::{
    LanguageController, MusicController, NotificationController, SoundController, ThemeController,
    Track, WindowController, WindowInfo, WindowState,
};
