//! # cs-platform
//!
//! Operating-system adapters for ClipStack: the live clipboard, the commit
//! sound and the application directories.

pub mod app_dirs;
pub mod clipboard;
pub mod sound;

pub use app_dirs::AppDirs;
pub use clipboard::{ClipboardRsSource, MemoryClipboard};
pub use sound::{ProcessSoundPlayer, SilentSoundPlayer};
