use serde::{Deserialize, Serialize};

use crate::clip::Checksum;
use crate::ids::{ClipId, DataId};

/// Clipboard format identifier.
///
/// A platform- or application-defined tag. The string form is also what the
/// store persists, so a loaded format maps back to the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatId(String);

impl FormatId {
    /// Wide (UTF-16LE) text.
    pub const UNICODE_TEXT: &'static str = "CF_UNICODETEXT";
    /// Narrow (byte) text.
    pub const TEXT: &'static str = "CF_TEXT";
    /// File drop list, one UTF-8 path per line.
    pub const FILE_DROP: &'static str = "CF_HDROP";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn unicode_text() -> Self {
        Self::new(Self::UNICODE_TEXT)
    }

    pub fn text() -> Self {
        Self::new(Self::TEXT)
    }

    pub fn file_drop() -> Self {
        Self::new(Self::FILE_DROP)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unicode_text(&self) -> bool {
        self.0 == Self::UNICODE_TEXT
    }

    pub fn is_text(&self) -> bool {
        self.0 == Self::TEXT
    }

    /// Either of the two text encodings.
    pub fn is_any_text(&self) -> bool {
        self.is_unicode_text() || self.is_text()
    }

    pub fn is_file_drop(&self) -> bool {
        self.0 == Self::FILE_DROP
    }
}

impl std::fmt::Display for FormatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormatId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FormatId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for FormatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One binary payload tagged by its format.
///
/// The payload buffer is owned by exactly one `ClipFormat` at a time. Handing
/// it to another holder goes through [`ClipFormat::take_data`], which leaves
/// this instance without a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipFormat {
    format: FormatId,
    data: Option<Vec<u8>>,

    /// Row id of the persisted format, set only when loaded from the store.
    pub data_id: Option<DataId>,

    /// Owning clip, set only when loaded from the store.
    pub parent_id: Option<ClipId>,
}

impl ClipFormat {
    pub fn new(format: FormatId, data: Vec<u8>) -> Self {
        Self {
            format,
            data: Some(data),
            data_id: None,
            parent_id: None,
        }
    }

    pub fn loaded(format: FormatId, data: Vec<u8>, data_id: DataId, parent_id: ClipId) -> Self {
        Self {
            format,
            data: Some(data),
            data_id: Some(data_id),
            parent_id: Some(parent_id),
        }
    }

    pub fn format(&self) -> &FormatId {
        &self.format
    }

    /// Payload bytes; empty once the buffer has been released or handed off.
    pub fn data(&self) -> &[u8] {
        self.data.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.data().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    /// Whether this instance no longer holds a buffer.
    pub fn is_released(&self) -> bool {
        self.data.is_none()
    }

    /// Swap in a new payload, releasing the previous one.
    pub fn replace_data(&mut self, data: Vec<u8>) {
        self.free();
        self.data = Some(data);
    }

    /// Hand the buffer to a new owner.
    pub fn take_data(&mut self) -> Option<Vec<u8>> {
        self.data.take()
    }

    /// Release the owned buffer. Calling it again is a no-op.
    pub fn free(&mut self) {
        self.data = None;
    }

    /// Reset the identity fields without touching the payload slot.
    ///
    /// Only meaningful after the buffer was moved out with [`ClipFormat::take_data`].
    pub fn clear(&mut self) {
        self.format = FormatId::new(String::new());
        self.data_id = None;
        self.parent_id = None;
    }
}

/// Small ordered collection of [`ClipFormat`], looked up by type.
///
/// Order matters: it is the canonical order the checksum is computed in, and
/// the store returns formats in this same order on load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipFormatSet {
    formats: Vec<ClipFormat>,
}

impl ClipFormatSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// First format of the given type.
    ///
    /// Linear scan; sets rarely hold more than a handful of entries.
    pub fn find(&self, format: &FormatId) -> Option<&ClipFormat> {
        self.formats.iter().find(|f| f.format() == format)
    }

    pub fn find_mut(&mut self, format: &FormatId) -> Option<&mut ClipFormat> {
        self.formats.iter_mut().find(|f| f.format() == format)
    }

    pub fn contains(&self, format: &FormatId) -> bool {
        self.find(format).is_some()
    }

    /// Append a format, taking ownership of its buffer.
    pub fn push(&mut self, format: ClipFormat) {
        self.formats.push(format);
    }

    /// Add a format, or replace the payload of an existing format of the same type.
    ///
    /// Returns `true` when an existing entry was replaced.
    pub fn insert_or_replace(&mut self, mut format: ClipFormat) -> bool {
        match self.find_mut(&format.format) {
            Some(existing) => {
                let data = format.take_data().unwrap_or_default();
                existing.replace_data(data);
                true
            }
            None => {
                self.formats.push(format);
                false
            }
        }
    }

    pub fn first(&self) -> Option<&ClipFormat> {
        self.formats.first()
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClipFormat> {
        self.formats.iter()
    }

    pub fn format_ids(&self) -> Vec<FormatId> {
        self.formats.iter().map(|f| f.format().clone()).collect()
    }

    pub fn total_size(&self) -> usize {
        self.formats.iter().map(ClipFormat::len).sum()
    }

    /// Content checksum over the payloads in canonical order.
    pub fn checksum(&self) -> Checksum {
        Checksum::of(self.formats.iter().map(ClipFormat::data))
    }

    /// Release every owned buffer and empty the set.
    pub fn release_all(&mut self) {
        for format in self.formats.iter_mut().rev() {
            format.free();
        }
        self.formats.clear();
    }
}

impl IntoIterator for ClipFormatSet {
    type Item = ClipFormat;
    type IntoIter = std::vec::IntoIter<ClipFormat>;

    fn into_iter(self) -> Self::IntoIter {
        self.formats.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClipFormatSet {
    type Item = &'a ClipFormat;
    type IntoIter = std::slice::Iter<'a, ClipFormat>;

    fn into_iter(self) -> Self::IntoIter {
        self.formats.iter()
    }
}

impl FromIterator<ClipFormat> for ClipFormatSet {
    fn from_iter<I: IntoIterator<Item = ClipFormat>>(iter: I) -> Self {
        Self {
            formats: iter.into_iter().collect(),
        }
    }
}
