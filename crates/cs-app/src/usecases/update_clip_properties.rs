use std::sync::Arc;

use cs_core::clip::text::truncate_chars;
use cs_core::order::OrderBand;
use cs_core::ports::ClipStorePort;
use cs_core::{ClipError, ClipHeader, ClipId};
use tracing::{debug, info, info_span, warn};

/// Header fields to change; `None` leaves a field as stored.
///
/// 属性补丁：`None` 表示保持原值。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipPropertiesPatch {
    pub description: Option<String>,
    pub quick_paste: Option<String>,
    pub shortcut: Option<i32>,
    pub global_shortcut: Option<bool>,
    pub dont_auto_delete: Option<bool>,
    /// `Some(None)` moves the clip back to the top level.
    pub parent_id: Option<Option<ClipId>>,
}

impl ClipPropertiesPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(self, header: &mut ClipHeader, description_max_length: usize) {
        if let Some(description) = self.description {
            header.description = truncate_chars(&description, description_max_length);
        }
        if let Some(quick_paste) = self.quick_paste {
            header.quick_paste = quick_paste;
        }
        if let Some(shortcut) = self.shortcut {
            header.shortcut = shortcut;
        }
        if let Some(global_shortcut) = self.global_shortcut {
            header.global_shortcut = global_shortcut;
        }
        if let Some(dont_auto_delete) = self.dont_auto_delete {
            header.dont_auto_delete = dont_auto_delete;
        }
        if let Some(parent_id) = self.parent_id.filter(|p| *p != header.parent_id) {
            // the pin belonged to the band being left
            let old_band = OrderBand::sticky_for(header.parent_id);
            if header.order.get(old_band.field).is_some() {
                debug!(field = ?old_band.field, "unpinned on parent change");
                header.order.set(old_band.field, None);
            }
            header.parent_id = parent_id;
        }
    }
}

/// Rewrite the header row of a stored clip.
///
/// A new description is truncated like a captured one. Moving the clip to
/// another parent drops its pin in the band it leaves.
pub struct UpdateClipPropertiesUseCase {
    store: Arc<dyn ClipStorePort>,
    description_max_length: usize,
}

impl UpdateClipPropertiesUseCase {
    pub fn new(store: Arc<dyn ClipStorePort>, description_max_length: usize) -> Self {
        Self {
            store,
            description_max_length,
        }
    }

    pub fn execute(&self, id: ClipId, patch: ClipPropertiesPatch) -> Result<ClipHeader, ClipError> {
        let span = info_span!("usecase.update_clip_properties.execute", clip_id = %id);
        let _enter = span.enter();

        let mut header = self
            .store
            .load_header(id)
            .map_err(ClipError::store)?
            .ok_or(ClipError::NotFound(id))?;

        if patch.is_empty() {
            return Ok(header);
        }
        if patch.parent_id == Some(Some(id)) {
            warn!("a clip cannot be its own parent");
            return Err(ClipError::InvalidClip);
        }

        patch.apply(&mut header, self.description_max_length);
        self.store.commit_header(&header).map_err(|e| {
            warn!(error = %e, "failed to update clip header");
            ClipError::store(e)
        })?;

        info!("updated clip properties");
        Ok(header)
    }
}
