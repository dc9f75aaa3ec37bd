//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! and platform implementations. The core never talks to the clipboard, the
//! database, the clock or the sound device directly.

mod clip_store;
mod clipboard_source;
mod clock;
mod sound;

pub use clip_store::*;
pub use clipboard_source::*;
pub use clock::*;
pub use sound::*;
