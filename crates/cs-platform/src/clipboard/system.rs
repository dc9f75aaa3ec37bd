use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use cs_core::clip::text::{encode_narrow, encode_wide};
use cs_core::ports::{ClipboardSnapshotPort, ClipboardSourcePort};
use cs_core::FormatId;
use tracing::debug;

use super::friendly_format_name;

pub(crate) const RICH_TEXT_FORMAT: &str = "Rich Text Format";
pub(crate) const HTML_FORMAT: &str = "HTML Format";

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// The live system clipboard, read through `clipboard-rs`.
///
/// Text is exposed both as a wide (UTF-16LE) and a narrow (UTF-8) payload,
/// each NUL-terminated. The file list becomes one path per line. Any other
/// format id is read as a raw native buffer.
pub struct ClipboardRsSource {
    ctx: ClipboardContext,
}

impl ClipboardRsSource {
    pub fn new() -> Result<Self> {
        let ctx = map_clipboard_err(ClipboardContext::new())?;
        Ok(Self { ctx })
    }

    fn content_format(format: &FormatId) -> ContentFormat {
        if format.is_any_text() {
            ContentFormat::Text
        } else if format.is_file_drop() {
            ContentFormat::Files
        } else if format.as_str() == RICH_TEXT_FORMAT {
            ContentFormat::Rtf
        } else if format.as_str() == HTML_FORMAT {
            ContentFormat::Html
        } else {
            ContentFormat::Other(format.as_str().to_string())
        }
    }

    fn has(&self, format: &FormatId) -> bool {
        self.ctx.has(Self::content_format(format))
    }
}

impl ClipboardSourcePort for ClipboardRsSource {
    fn is_format_available(&self, format: &FormatId) -> bool {
        self.has(format)
    }

    fn attach(&self) -> Result<Box<dyn ClipboardSnapshotPort + '_>> {
        Ok(Box::new(ClipboardRsSnapshot { source: self }))
    }

    fn format_name(&self, format: &FormatId) -> String {
        match format.as_str() {
            RICH_TEXT_FORMAT => "Rich Text".to_string(),
            HTML_FORMAT => "HTML".to_string(),
            _ => friendly_format_name(format),
        }
    }
}

struct ClipboardRsSnapshot<'a> {
    source: &'a ClipboardRsSource,
}

impl ClipboardSnapshotPort for ClipboardRsSnapshot<'_> {
    fn is_format_available(&self, format: &FormatId) -> bool {
        self.source.has(format)
    }

    fn available_formats(&self) -> Vec<FormatId> {
        let mut formats = Vec::new();
        let ctx = &self.source.ctx;

        if ctx.has(ContentFormat::Text) {
            formats.push(FormatId::unicode_text());
            formats.push(FormatId::text());
        }
        if ctx.has(ContentFormat::Rtf) {
            formats.push(FormatId::new(RICH_TEXT_FORMAT));
        }
        if ctx.has(ContentFormat::Html) {
            formats.push(FormatId::new(HTML_FORMAT));
        }
        if ctx.has(ContentFormat::Files) {
            formats.push(FormatId::file_drop());
        }

        // native fallback
        match ctx.available_formats() {
            Ok(native) => {
                for name in native {
                    let format = FormatId::new(name);
                    if !formats.contains(&format) {
                        formats.push(format);
                    }
                }
            }
            Err(e) => debug!(error = %e, "failed to enumerate native clipboard formats"),
        }
        formats
    }

    fn fetch(&self, format: &FormatId) -> Result<Option<Vec<u8>>> {
        if !self.source.has(format) {
            return Ok(None);
        }
        let ctx = &self.source.ctx;

        let bytes = if format.is_unicode_text() {
            encode_wide(&map_clipboard_err(ctx.get_text())?)
        } else if format.is_text() {
            encode_narrow(&map_clipboard_err(ctx.get_text())?)
        } else if format.is_file_drop() {
            map_clipboard_err(ctx.get_files())?.join("\n").into_bytes()
        } else if format.as_str() == RICH_TEXT_FORMAT {
            map_clipboard_err(ctx.get_rich_text())?.into_bytes()
        } else if format.as_str() == HTML_FORMAT {
            map_clipboard_err(ctx.get_html())?.into_bytes()
        } else {
            map_clipboard_err(ctx.get_buffer(format.as_str()))?
        };
        Ok(Some(bytes))
    }
}
