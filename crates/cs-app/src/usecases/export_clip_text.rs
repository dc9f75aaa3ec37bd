use std::path::Path;
use std::sync::Arc;

use cs_core::clip::export::{render_text_export, TextEncoding, TextExportFlags};
use cs_core::ports::ClipStorePort;
use cs_core::{ClipError, ClipId};
use tracing::{info, info_span, warn};

/// Write the text payload of a stored clip to a file.
///
/// 导出条目文本到文件。
pub struct ExportClipTextUseCase {
    store: Arc<dyn ClipStorePort>,
}

impl ExportClipTextUseCase {
    pub fn new(store: Arc<dyn ClipStorePort>) -> Self {
        Self { store }
    }

    /// Returns the encoding written, or `None` when the clip has no text in
    /// any of the requested encodings (no file is created then).
    pub fn execute(
        &self,
        id: ClipId,
        path: &Path,
        flags: TextExportFlags,
    ) -> Result<Option<TextEncoding>, ClipError> {
        let span = info_span!("usecase.export_clip_text.execute", clip_id = %id, path = %path.display());
        let _enter = span.enter();

        let formats = self.store.load_formats(id, true).map_err(ClipError::store)?;
        let Some(rendered) = render_text_export(&formats, flags) else {
            info!("no text in the requested encodings");
            return Ok(None);
        };

        std::fs::write(path, &rendered.bytes).map_err(|source| {
            warn!(error = %source, "failed to write export file");
            ClipError::ExportIo {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!(encoding = ?rendered.encoding, bytes = rendered.bytes.len(), "exported clip text");
        Ok(Some(rendered.encoding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryClipStore;
    use cs_core::clip::text::{encode_narrow, encode_wide};
    use cs_core::{ClipFormat, ClipFormatSet, ClipHeader, FormatId};
    use tempfile::tempdir;

    fn stored(store: &InMemoryClipStore, formats: Vec<ClipFormat>) -> ClipId {
        let set: ClipFormatSet = formats.into_iter().collect();
        store.insert_clip(&ClipHeader::default(), &set).unwrap()
    }

    #[test]
    fn utf8_export_has_bom() {
        let store = Arc::new(InMemoryClipStore::new());
        let id = stored(
            &store,
            vec![ClipFormat::new(FormatId::unicode_text(), encode_wide("héllo"))],
        );
        let dir = tempdir().unwrap();
        let path = dir.path().join("clip.txt");
        let uc = ExportClipTextUseCase::new(store);

        let encoding = uc
            .execute(
                id,
                &path,
                TextExportFlags {
                    utf8: true,
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(encoding, Some(TextEncoding::Utf8Bom));
        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[..3], &[0xEF, 0xBB, 0xBF]);
        assert_eq!(&written[3..], "héllo".as_bytes());
    }

    #[test]
    fn narrow_only_clip_with_wide_request_writes_nothing() {
        let store = Arc::new(InMemoryClipStore::new());
        let id = stored(&store, vec![ClipFormat::new(FormatId::text(), encode_narrow("abc"))]);
        let dir = tempdir().unwrap();
        let path = dir.path().join("clip.txt");
        let uc = ExportClipTextUseCase::new(store);

        let encoding = uc
            .execute(
                id,
                &path,
                TextExportFlags {
                    utf16: true,
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(encoding, None);
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_path_is_export_io() {
        let store = Arc::new(InMemoryClipStore::new());
        let id = stored(&store, vec![ClipFormat::new(FormatId::text(), encode_narrow("abc"))]);
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("clip.txt");
        let uc = ExportClipTextUseCase::new(store);

        let err = uc
            .execute(
                id,
                &path,
                TextExportFlags {
                    narrow: true,
                    ..Default::default()
                },
            )
            .unwrap_err();

        assert!(matches!(err, ClipError::ExportIo { path: p, .. } if p == path));
    }
}
