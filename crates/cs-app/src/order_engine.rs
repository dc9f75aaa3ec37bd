//! Order engine: turns a reorder request into one key update.
//!
//! 排序引擎：每次移动只计算一个新键，不重排其他条目。

use std::sync::Arc;

use anyhow::Result;
use cs_core::order::{
    latest_after, promote_between, sticky_bottom_before, sticky_top_after, OrderBand,
};
use cs_core::ports::{ClipStorePort, KeyUpdate};
use cs_core::{ClipHeader, ClipId};
use tracing::debug;

/// Fresh "latest" keys for a clip about to become the newest entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatestKeys {
    pub clip_order: f64,
    /// Present only for a clip with a parent.
    pub clip_group_order: Option<f64>,
}

pub struct OrderEngine {
    store: Arc<dyn ClipStorePort>,
}

impl OrderEngine {
    pub fn new(store: Arc<dyn ClipStorePort>) -> Self {
        Self { store }
    }

    /// Key above every clip of the main list.
    pub fn latest_order(&self) -> Result<f64> {
        let band = OrderBand::primary_for(None);
        let max = self.store.max_key(band.field, band.scope)?;
        Ok(latest_after(max))
    }

    /// Key above every child of `parent`.
    pub fn latest_group_order(&self, parent: ClipId) -> Result<f64> {
        let band = OrderBand::primary_for(Some(parent));
        let max = self.store.max_key(band.field, band.scope)?;
        Ok(latest_after(max))
    }

    pub fn latest_keys(&self, parent: Option<ClipId>) -> Result<LatestKeys> {
        let clip_order = self.latest_order()?;
        let clip_group_order = parent
            .map(|parent| self.latest_group_order(parent))
            .transpose()?;

        debug!(clip_order, ?clip_group_order, "computed latest order keys");
        Ok(LatestKeys {
            clip_order,
            clip_group_order,
        })
    }

    /// Move a clip above its next-higher neighbour.
    ///
    /// A pinned clip moves within its sticky band, any other clip within its
    /// primary (or group) band. Returns `None` when the clip is already topmost.
    pub fn move_up(&self, header: &ClipHeader) -> Result<Option<KeyUpdate>> {
        let id = committed_id(header)?;

        let sticky = OrderBand::sticky_for(header.parent_id);
        let (band, current) = match header.order.get(sticky.field) {
            Some(key) => (sticky, key),
            None => {
                let primary = OrderBand::primary_for(header.parent_id);
                (primary, header.order.get(primary.field).unwrap_or_default())
            }
        };

        let above = self.store.next_key_above(band.field, band.scope, current)?;
        let two_above = match above {
            Some(above) => self.store.next_key_above(band.field, band.scope, above)?,
            None => None,
        };

        Ok(promote_between(above, two_above).map(|key| {
            debug!(clip_id = %id, field = ?band.field, from = current, to = key, "move up");
            KeyUpdate {
                id,
                field: band.field,
                key: Some(key),
            }
        }))
    }

    /// Pin above every pinned clip of the clip's sticky band.
    pub fn pin_top(&self, header: &ClipHeader) -> Result<KeyUpdate> {
        let id = committed_id(header)?;
        let band = OrderBand::sticky_for(header.parent_id);
        let max = self.store.max_key(band.field, band.scope)?;

        Ok(KeyUpdate {
            id,
            field: band.field,
            key: Some(sticky_top_after(max)),
        })
    }

    /// Pin below every pinned clip of the clip's sticky band.
    pub fn pin_bottom(&self, header: &ClipHeader) -> Result<KeyUpdate> {
        let id = committed_id(header)?;
        let band = OrderBand::sticky_for(header.parent_id);
        let min = self.store.min_key(band.field, band.scope)?;

        Ok(KeyUpdate {
            id,
            field: band.field,
            key: Some(sticky_bottom_before(min)),
        })
    }

    /// Reset the sticky key of the clip's band.
    pub fn unpin(&self, header: &ClipHeader) -> Result<KeyUpdate> {
        let id = committed_id(header)?;
        let band = OrderBand::sticky_for(header.parent_id);

        Ok(KeyUpdate {
            id,
            field: band.field,
            key: None,
        })
    }
}

fn committed_id(header: &ClipHeader) -> Result<ClipId> {
    header
        .id
        .ok_or_else(|| anyhow::anyhow!("clip has not been committed"))
}
