//! Clip data model.
//!
//! A [`Clip`] is one captured clipboard event: a [`ClipHeader`] with metadata
//! and order keys, plus a [`ClipFormatSet`] holding the payload of every
//! format that was captured.

mod checksum;
pub mod description;
pub mod export;
mod format;
mod header;
mod list;
pub mod text;

pub use checksum::Checksum;
pub use export::{render_text_export, RenderedTextExport, TextEncoding, TextExportFlags};
pub use format::{ClipFormat, ClipFormatSet, FormatId};
pub use header::ClipHeader;
pub use list::ClipList;

/// 剪贴条目聚合：元数据 + 排序键 + 格式集合。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clip {
    pub header: ClipHeader,
    pub formats: ClipFormatSet,
}

impl Clip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(header: ClipHeader, formats: ClipFormatSet) -> Self {
        Self { header, formats }
    }

    pub fn id(&self) -> Option<crate::ids::ClipId> {
        self.header.id
    }

    /// Copy `bytes` in as a payload of type `format`.
    ///
    /// An existing payload of the same type is replaced. Text payloads also
    /// refresh the description. Returns `true` when an existing entry was replaced.
    pub fn add_format(
        &mut self,
        format: FormatId,
        bytes: &[u8],
        description_max_length: usize,
        now_ms: i64,
    ) -> bool {
        if let Some(description) =
            description::describe_from_text(&format, bytes, description_max_length)
        {
            self.header.description = description;
        }
        self.header.created_at_ms = now_ms;
        self.formats
            .insert_or_replace(ClipFormat::new(format, bytes.to_vec()))
    }

    /// Checksum of the current payloads.
    pub fn checksum(&self) -> Checksum {
        self.formats.checksum()
    }

    /// Recompute the checksum and store it in the header.
    pub fn refresh_checksum(&mut self) -> Checksum {
        let checksum = self.checksum();
        self.header.checksum = checksum;
        checksum
    }

    /// Wide text payload, decoded.
    pub fn unicode_text(&self) -> Option<String> {
        self.formats
            .find(&FormatId::unicode_text())
            .map(|f| text::decode_wide(f.data()))
    }

    /// Narrow text payload without its terminator.
    pub fn narrow_text(&self) -> Option<&[u8]> {
        self.formats
            .find(&FormatId::text())
            .map(|f| text::narrow_bytes(f.data()))
    }

    /// Text of the clip, preferring the wide payload.
    pub fn text(&self) -> Option<String> {
        self.unicode_text().or_else(|| {
            self.narrow_text()
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        })
    }

    /// A clip without formats must never be committed.
    pub fn is_valid(&self) -> bool {
        !self.formats.is_empty()
    }

    /// Release every format buffer, keeping the header.
    pub fn release_formats(&mut self) {
        self.formats.release_all();
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        self.release_formats();
        self.header = ClipHeader::default();
    }
}
