use std::sync::Arc;

use cs_core::ports::ClipStorePort;
use cs_core::{Clip, ClipError, ClipId};
use tracing::{debug, info_span};

/// Load a stored clip, header and formats, into an owned [`Clip`].
pub struct LoadClipUseCase {
    store: Arc<dyn ClipStorePort>,
}

impl LoadClipUseCase {
    pub fn new(store: Arc<dyn ClipStorePort>) -> Self {
        Self { store }
    }

    /// With `text_only`, only wide and narrow text formats are loaded.
    pub fn execute(&self, id: ClipId, text_only: bool) -> Result<Clip, ClipError> {
        let span = info_span!("usecase.load_clip.execute", clip_id = %id, text_only);
        let _enter = span.enter();

        let header = self
            .store
            .load_header(id)
            .map_err(ClipError::store)?
            .ok_or(ClipError::NotFound(id))?;
        let formats = self
            .store
            .load_formats(id, text_only)
            .map_err(ClipError::store)?;

        debug!(formats = formats.len(), "loaded clip");
        Ok(Clip::from_parts(header, formats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryClipStore;
    use cs_core::clip::text::{encode_narrow, encode_wide};
    use cs_core::{ClipFormat, ClipFormatSet, ClipHeader, FormatId};

    #[test]
    fn loads_all_or_text_formats() {
        let store = Arc::new(InMemoryClipStore::new());
        let set: ClipFormatSet = vec![
            ClipFormat::new(FormatId::unicode_text(), encode_wide("hi")),
            ClipFormat::new(FormatId::text(), encode_narrow("hi")),
            ClipFormat::new(FormatId::new("PNG"), vec![1, 2, 3]),
        ]
        .into_iter()
        .collect();
        let id = store.insert_clip(&ClipHeader::default(), &set).unwrap();
        let uc = LoadClipUseCase::new(store);

        let full = uc.execute(id, false).unwrap();
        assert_eq!(full.id(), Some(id));
        assert_eq!(full.formats.len(), 3);
        assert_eq!(full.text().as_deref(), Some("hi"));

        let text = uc.execute(id, true).unwrap();
        assert_eq!(
            text.formats.format_ids(),
            vec![FormatId::unicode_text(), FormatId::text()]
        );
    }

    #[test]
    fn missing_clip_is_not_found() {
        let uc = LoadClipUseCase::new(Arc::new(InMemoryClipStore::new()));

        assert!(matches!(
            uc.execute(ClipId::new(3), false),
            Err(ClipError::NotFound(_))
        ));
    }
}
