//! Plain-text export of a clip's text payload.

use crate::clip::text::{decode_wide, narrow_bytes, wide_units_bytes};
use crate::clip::{ClipFormatSet, FormatId};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Encodings the caller accepts for the exported file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextExportFlags {
    pub utf8: bool,
    pub utf16: bool,
    pub narrow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8Bom,
    Utf16LeBom,
    Narrow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTextExport {
    pub encoding: TextEncoding,
    pub bytes: Vec<u8>,
}

/// Render the file contents for a text export.
///
/// Precedence: UTF-8 with BOM from wide text, UTF-16LE with BOM from wide
/// text, then the raw narrow text. Returns `None` if no requested encoding has
/// a matching payload.
pub fn render_text_export(
    formats: &ClipFormatSet,
    flags: TextExportFlags,
) -> Option<RenderedTextExport> {
    let wide = formats.find(&FormatId::unicode_text());

    if let (true, Some(wide)) = (flags.utf8, wide) {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(decode_wide(wide.data()).as_bytes());
        return Some(RenderedTextExport {
            encoding: TextEncoding::Utf8Bom,
            bytes,
        });
    }

    if let (true, Some(wide)) = (flags.utf16, wide) {
        let mut bytes = UTF16LE_BOM.to_vec();
        bytes.extend(wide_units_bytes(wide.data()));
        return Some(RenderedTextExport {
            encoding: TextEncoding::Utf16LeBom,
            bytes,
        });
    }

    if flags.narrow {
        if let Some(narrow) = formats.find(&FormatId::text()) {
            return Some(RenderedTextExport {
                encoding: TextEncoding::Narrow,
                bytes: narrow_bytes(narrow.data()).to_vec(),
            });
        }
    }

    None
}
