//! Human-readable clip descriptions.

use crate::clip::text::{decode_file_drop, decode_narrow, decode_wide, truncate_chars};
use crate::clip::{ClipFormatSet, FormatId};

/// At most this many files are listed in a file-drop description.
pub const MAX_DESCRIBED_FILES: usize = 5;

/// Description taken from a text payload, or `None` if `format` is not text
/// or the decoded text is empty.
pub fn describe_from_text(format: &FormatId, bytes: &[u8], max_length: usize) -> Option<String> {
    let text = if format.is_unicode_text() {
        decode_wide(bytes)
    } else if format.is_text() {
        decode_narrow(bytes)
    } else {
        return None;
    };

    if text.is_empty() {
        return None;
    }
    Some(truncate_chars(&text, max_length))
}

/// Description derived from captured content when no text was available.
///
/// A file drop lists its files as `"<name> - <path>"`; anything else is
/// described by the display name of its first format.
pub fn describe_from_formats<F>(formats: &ClipFormatSet, max_length: usize, name_of: F) -> String
where
    F: Fn(&FormatId) -> String,
{
    let description = match formats.find(&FormatId::file_drop()) {
        Some(drop) => describe_file_drop(drop.data()),
        None => formats
            .first()
            .map(|first| name_of(first.format()))
            .unwrap_or_default(),
    };
    truncate_chars(&description, max_length)
}

fn describe_file_drop(bytes: &[u8]) -> String {
    let paths = decode_file_drop(bytes);
    let prefix = if paths.len() > 1 {
        "Copied Files - "
    } else {
        "Copied File - "
    };

    let entries: Vec<String> = paths
        .iter()
        .take(MAX_DESCRIBED_FILES)
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("{} - {}", name, path.display())
        })
        .collect();

    format!("{}{}", prefix, entries.join("\n"))
}
