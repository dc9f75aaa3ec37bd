use std::sync::Arc;

use cs_core::ports::{ClipStorePort, KeyUpdate};
use cs_core::{ClipError, ClipHeader, ClipId};
use tracing::{info, info_span, warn};

use crate::order_engine::OrderEngine;

/// Reorder operations exposed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderAction {
    /// Swap places with the next-higher neighbour.
    MoveUp,
    /// Pin above every pinned clip.
    PinTop,
    /// Pin below every pinned clip.
    PinBottom,
    /// Leave the sticky band.
    Unpin,
}

/// Apply one [`ReorderAction`] to a stored clip.
///
/// 调整条目顺序：只写一个排序键。
pub struct ReorderClipUseCase {
    store: Arc<dyn ClipStorePort>,
    engine: OrderEngine,
}

impl ReorderClipUseCase {
    pub fn new(store: Arc<dyn ClipStorePort>) -> Self {
        Self {
            engine: OrderEngine::new(store.clone()),
            store,
        }
    }

    /// Returns the header as it is stored after the action.
    ///
    /// Moving up the topmost clip writes nothing and returns it unchanged.
    pub fn execute(&self, id: ClipId, action: ReorderAction) -> Result<ClipHeader, ClipError> {
        let span = info_span!("usecase.reorder_clip.execute", clip_id = %id, action = ?action);
        let _enter = span.enter();

        let mut header = self
            .store
            .load_header(id)
            .map_err(ClipError::store)?
            .ok_or(ClipError::NotFound(id))?;

        let update = self.plan(&header, action).map_err(ClipError::store)?;
        let Some(update) = update else {
            info!("clip already at the top of its band");
            return Ok(header);
        };

        self.store
            .update_keys(std::slice::from_ref(&update))
            .map_err(|e| {
                warn!(error = %e, "failed to write order key");
                ClipError::store(e)
            })?;

        header.order.set(update.field, update.key);
        info!(field = ?update.field, key = ?update.key, "reordered clip");
        Ok(header)
    }

    fn plan(&self, header: &ClipHeader, action: ReorderAction) -> anyhow::Result<Option<KeyUpdate>> {
        match action {
            ReorderAction::MoveUp => self.engine.move_up(header),
            ReorderAction::PinTop => self.engine.pin_top(header).map(Some),
            ReorderAction::PinBottom => self.engine.pin_bottom(header).map(Some),
            ReorderAction::Unpin => self.engine.unpin(header).map(Some),
        }
    }
}
