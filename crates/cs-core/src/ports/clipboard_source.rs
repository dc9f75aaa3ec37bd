//! Clipboard source ports.
//!
//! 剪贴板来源端口：平台层实现，核心只通过这两个 trait 读取剪贴板。
//!
//! The system clipboard is owned by another process and is not reentrant, so
//! these traits are deliberately not `Send`/`Sync`: a capture runs start to
//! finish on the thread that attached.

use crate::clip::FormatId;

/// Access to the live system clipboard.
pub trait ClipboardSourcePort {
    /// Cheap availability probe, usable before attaching.
    fn is_format_available(&self, format: &FormatId) -> bool;

    /// Attach to the current clipboard contents.
    ///
    /// The returned snapshot stays valid until dropped; dropping it releases
    /// the clipboard.
    fn attach(&self) -> anyhow::Result<Box<dyn ClipboardSnapshotPort + '_>>;

    /// Human-readable name of a format.
    fn format_name(&self, format: &FormatId) -> String;
}

/// An attached clipboard snapshot.
pub trait ClipboardSnapshotPort {
    fn is_format_available(&self, format: &FormatId) -> bool;

    /// Formats currently offered, in the order the clipboard enumerates them.
    fn available_formats(&self) -> Vec<FormatId>;

    /// Raw payload of one format. The caller owns the returned buffer.
    ///
    /// `Ok(None)` means the format is not offered.
    fn fetch(&self, format: &FormatId) -> anyhow::Result<Option<Vec<u8>>>;
}
