use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::Result;
use cs_core::clip::text::{encode_narrow, encode_wide};
use cs_core::ports::{ClipboardSnapshotPort, ClipboardSourcePort};
use cs_core::FormatId;

use super::friendly_format_name;

/// Clipboard held in process memory.
///
/// Feeds the capture pipeline from explicit content (the `add` command, or
/// tests) instead of the system clipboard. Formats are offered in the order
/// they were set.
///
/// 内存剪贴板：不访问系统剪贴板。
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    formats: Mutex<Vec<(FormatId, Vec<u8>)>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer `text` as both wide and narrow text.
    pub fn with_text(text: &str) -> Self {
        let clipboard = Self::new();
        clipboard.set(FormatId::unicode_text(), encode_wide(text));
        clipboard.set(FormatId::text(), encode_narrow(text));
        clipboard
    }

    /// Offer `bytes` under `format`, replacing an earlier payload of the same format.
    pub fn set(&self, format: FormatId, bytes: Vec<u8>) {
        let mut formats = self.formats();
        match formats.iter_mut().find(|(f, _)| *f == format) {
            Some(slot) => slot.1 = bytes,
            None => formats.push((format, bytes)),
        }
    }

    pub fn clear(&self) {
        self.formats().clear();
    }

    /// Poisoning is ignored: the list holds plain data.
    fn formats(&self) -> MutexGuard<'_, Vec<(FormatId, Vec<u8>)>> {
        self.formats.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn offers(&self, format: &FormatId) -> bool {
        self.formats().iter().any(|(f, _)| f == format)
    }
}

impl ClipboardSourcePort for MemoryClipboard {
    fn is_format_available(&self, format: &FormatId) -> bool {
        self.offers(format)
    }

    fn attach(&self) -> Result<Box<dyn ClipboardSnapshotPort + '_>> {
        Ok(Box::new(MemorySnapshot { source: self }))
    }

    fn format_name(&self, format: &FormatId) -> String {
        friendly_format_name(format)
    }
}

struct MemorySnapshot<'a> {
    source: &'a MemoryClipboard,
}

impl ClipboardSnapshotPort for MemorySnapshot<'_> {
    fn is_format_available(&self, format: &FormatId) -> bool {
        self.source.offers(format)
    }

    fn available_formats(&self) -> Vec<FormatId> {
        self.source.formats().iter().map(|(f, _)| f.clone()).collect()
    }

    fn fetch(&self, format: &FormatId) -> Result<Option<Vec<u8>>> {
        Ok(self
            .source
            .formats()
            .iter()
            .find(|(f, _)| f == format)
            .map(|(_, bytes)| bytes.clone()))
    }
}
