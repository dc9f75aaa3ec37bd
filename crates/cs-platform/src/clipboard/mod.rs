mod memory;
mod system;

pub use memory::MemoryClipboard;
pub use system::ClipboardRsSource;

use cs_core::FormatId;

/// Display name of the formats every platform knows; other formats keep
/// their native name.
pub(crate) fn friendly_format_name(format: &FormatId) -> String {
    if format.is_unicode_text() {
        "Unicode Text".to_string()
    } else if format.is_text() {
        "Text".to_string()
    } else if format.is_file_drop() {
        "Files".to_string()
    } else {
        format.as_str().to_string()
    }
}
