use std::sync::Arc;

use cs_core::ports::{ClipStorePort, KeyUpdate};
use cs_core::{ClipError, OrderField, OrderScope};
use tracing::{info, info_span, warn};

/// Rewrite the keys of one field and scope to `1..=n`, keeping their order.
///
/// Fractional keys lose precision after many promotions between the same
/// neighbours; this maintenance pass restores integer spacing. It runs out of
/// band and writes every key in one store call.
///
/// 排序键重整：按现有顺序重写为 1..n。
pub struct RenormalizeOrderUseCase {
    store: Arc<dyn ClipStorePort>,
}

impl RenormalizeOrderUseCase {
    pub fn new(store: Arc<dyn ClipStorePort>) -> Self {
        Self { store }
    }

    /// Returns the number of keys rewritten.
    pub fn execute(&self, field: OrderField, scope: OrderScope) -> Result<usize, ClipError> {
        let span = info_span!("usecase.renormalize_order.execute", field = ?field, scope = ?scope);
        let _enter = span.enter();

        let keys = self
            .store
            .ordered_keys(field, scope)
            .map_err(ClipError::store)?;

        let updates: Vec<KeyUpdate> = keys
            .iter()
            .enumerate()
            .filter(|(index, (_, key))| *key != (index + 1) as f64)
            .map(|(index, (id, _))| KeyUpdate {
                id: *id,
                field,
                key: Some((index + 1) as f64),
            })
            .collect();

        if updates.is_empty() {
            info!(keys = keys.len(), "keys already normalized");
            return Ok(0);
        }

        self.store.update_keys(&updates).map_err(|e| {
            warn!(error = %e, "failed to rewrite order keys");
            ClipError::store(e)
        })?;

        info!(rewritten = updates.len(), keys = keys.len(), "renormalized order keys");
        Ok(updates.len())
    }
}
