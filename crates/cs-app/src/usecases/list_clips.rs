use std::sync::Arc;

use cs_core::order::visible_cmp;
use cs_core::ports::ClipStorePort;
use cs_core::{ClipError, ClipHeader, ClipId};
use tracing::{debug, info_span};

/// Headers of one list level in visible order: pinned clips first, then the
/// rest newest first.
pub struct ListClipsUseCase {
    store: Arc<dyn ClipStorePort>,
}

impl ListClipsUseCase {
    pub fn new(store: Arc<dyn ClipStorePort>) -> Self {
        Self { store }
    }

    /// `parent = None` lists the top level. `limit = 0` lists everything.
    pub fn execute(&self, parent: Option<ClipId>, limit: usize) -> Result<Vec<ClipHeader>, ClipError> {
        let span = info_span!("usecase.list_clips.execute", parent = ?parent, limit);
        let _enter = span.enter();

        let mut headers = self.store.list_headers(parent).map_err(ClipError::store)?;
        headers.sort_by(visible_cmp);
        if limit > 0 {
            headers.truncate(limit);
        }

        debug!(count = headers.len(), "listed clips");
        Ok(headers)
    }
}
