use std::sync::Arc;

use cs_core::clip::text::truncate_chars;
use cs_core::ports::ClipStorePort;
use cs_core::{Clip, ClipError};
use tracing::{info, info_span, warn};

/// Replace the stored formats of an existing clip with edited content.
///
/// 保存编辑后的内容：替换全部格式并更新校验和。
///
/// Formats, checksum and (optionally) description are written in one store
/// call. The clip header is only updated after that call succeeded.
pub struct SaveEditedClipUseCase {
    store: Arc<dyn ClipStorePort>,
    description_max_length: usize,
}

impl SaveEditedClipUseCase {
    pub fn new(store: Arc<dyn ClipStorePort>, description_max_length: usize) -> Self {
        Self {
            store,
            description_max_length,
        }
    }

    /// With `update_description`, the description is rebuilt from the
    /// clip's text, when it has any.
    pub fn execute(&self, clip: &mut Clip, update_description: bool) -> Result<(), ClipError> {
        let span = info_span!("usecase.save_edited_clip.execute", update_description);
        let _enter = span.enter();

        let Some(id) = clip.id() else {
            warn!("cannot save edits of an uncommitted clip");
            return Err(ClipError::InvalidClip);
        };
        if !clip.is_valid() {
            warn!(clip_id = %id, "refusing to save a clip without formats");
            return Err(ClipError::InvalidClip);
        }

        let checksum = clip.checksum();
        let description = if update_description {
            clip.text()
                .map(|text| truncate_chars(&text, self.description_max_length))
        } else {
            None
        };

        self.store
            .replace_formats(id, &clip.formats, checksum, description.as_deref())
            .map_err(|e| {
                warn!(clip_id = %id, error = %e, "failed to save edited clip");
                ClipError::store(e)
            })?;

        clip.header.checksum = checksum;
        if let Some(description) = description {
            clip.header.description = description;
        }
        info!(clip_id = %id, checksum = %checksum, "saved edited clip");
        Ok(())
    }
}
