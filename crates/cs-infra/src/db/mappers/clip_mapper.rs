use anyhow::{anyhow, Result};
use cs_core::order::{sticky_from_storage, sticky_to_storage, OrderKeys};
use cs_core::{Checksum, ClipHeader, ClipId};

use crate::db::models::{ClipRow, NewClipRow};
use crate::db::ports::{InsertMapper, RowMapper};

pub struct ClipRowMapper;

impl InsertMapper<ClipHeader, NewClipRow> for ClipRowMapper {
    fn to_row(&self, domain: &ClipHeader) -> Result<NewClipRow> {
        Ok(NewClipRow {
            created_at: domain.created_at_ms,
            last_paste_at: domain.last_paste_at_ms,
            description: domain.description.clone(),
            checksum: domain.checksum.to_storage(),
            parent_id: ClipId::to_storage(domain.parent_id),
            is_group: domain.is_group,
            quick_paste: domain.quick_paste.clone(),
            shortcut: domain.shortcut,
            global_shortcut: domain.global_shortcut,
            dont_auto_delete: domain.dont_auto_delete,
            clip_order: domain.order.clip_order,
            clip_group_order: domain.order.clip_group_order,
            sticky_order: sticky_to_storage(domain.order.sticky_order),
            sticky_group_order: sticky_to_storage(domain.order.sticky_group_order),
        })
    }
}

impl RowMapper<ClipRow, ClipHeader> for ClipRowMapper {
    fn to_domain(&self, row: &ClipRow) -> Result<ClipHeader> {
        let id = ClipId::from_storage(row.id).ok_or_else(|| anyhow!("invalid clip row id {}", row.id))?;

        Ok(ClipHeader {
            id: Some(id),
            created_at_ms: row.created_at,
            last_paste_at_ms: row.last_paste_at,
            description: row.description.clone(),
            checksum: Checksum::from_storage(row.checksum),
            parent_id: ClipId::from_storage(row.parent_id),
            is_group: row.is_group,
            quick_paste: row.quick_paste.clone(),
            shortcut: row.shortcut,
            global_shortcut: row.global_shortcut,
            dont_auto_delete: row.dont_auto_delete,
            order: OrderKeys {
                clip_order: row.clip_order,
                clip_group_order: row.clip_group_order,
                sticky_order: sticky_from_storage(row.sticky_order),
                sticky_group_order: sticky_from_storage(row.sticky_group_order),
            },
        })
    }
}
