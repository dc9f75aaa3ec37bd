//! Clip store port.
//!
//! Persistence boundary of the core. The adapter owns transactions: every
//! method that writes more than one row does so atomically.

use crate::clip::{Checksum, ClipFormat, ClipFormatSet, ClipHeader, FormatId};
use crate::ids::{ClipId, DataId};
use crate::order::{OrderField, OrderScope};

/// Header-only mutation applied when a duplicate is committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuplicatePromotion {
    pub clip_order: f64,
    /// Set only for a clip that has a parent.
    pub clip_group_order: Option<f64>,
    pub last_paste_at_ms: i64,
}

/// New value for one order key of one clip. `None` unpins a sticky key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyUpdate {
    pub id: ClipId,
    pub field: OrderField,
    pub key: Option<f64>,
}

pub trait ClipStorePort: Send + Sync {
    /// Insert the header when `header.id` is `None`, otherwise update every
    /// metadata field and order key of the existing row.
    ///
    /// Returns the row id.
    fn commit_header(&self, header: &ClipHeader) -> anyhow::Result<ClipId>;

    /// Persist each format as its own row under `id`.
    ///
    /// Rows are inserted in reverse set order so that loading by row id
    /// descending yields the set order again.
    fn commit_formats(&self, id: ClipId, formats: &ClipFormatSet) -> anyhow::Result<Vec<DataId>>;

    /// Insert a new header and its formats in one transaction.
    fn insert_clip(&self, header: &ClipHeader, formats: &ClipFormatSet) -> anyhow::Result<ClipId>;

    /// Replace all formats of a clip, store the new checksum and, when given,
    /// the new description. One transaction.
    fn replace_formats(
        &self,
        id: ClipId,
        formats: &ClipFormatSet,
        checksum: Checksum,
        description: Option<&str>,
    ) -> anyhow::Result<()>;

    /// Push new order keys and last-paste time onto an existing row.
    ///
    /// Never touches format rows.
    fn promote_duplicate(&self, id: ClipId, promotion: &DuplicatePromotion) -> anyhow::Result<()>;

    /// First stored clip with this checksum (lowest id).
    fn find_by_checksum(&self, checksum: Checksum) -> anyhow::Result<Option<ClipId>>;

    fn load_header(&self, id: ClipId) -> anyhow::Result<Option<ClipHeader>>;

    /// Header of the most recently inserted clip (highest id).
    fn load_latest_header(&self) -> anyhow::Result<Option<ClipHeader>>;

    /// Formats of a clip ordered by row id descending. `text_only` restricts
    /// the result to the two text formats.
    fn load_formats(&self, id: ClipId, text_only: bool) -> anyhow::Result<ClipFormatSet>;

    fn load_format(&self, id: ClipId, format: &FormatId) -> anyhow::Result<Option<ClipFormat>>;

    /// Format types of a clip without their payloads.
    fn load_format_types(&self, id: ClipId) -> anyhow::Result<Vec<FormatId>>;

    /// Largest key of `field` in `scope`. Sticky fields ignore unpinned rows.
    fn max_key(&self, field: OrderField, scope: OrderScope) -> anyhow::Result<Option<f64>>;

    /// Smallest key of `field` in `scope`. Sticky fields ignore unpinned rows.
    fn min_key(&self, field: OrderField, scope: OrderScope) -> anyhow::Result<Option<f64>>;

    /// Smallest key strictly greater than `key`. Sticky fields ignore unpinned rows.
    fn next_key_above(
        &self,
        field: OrderField,
        scope: OrderScope,
        key: f64,
    ) -> anyhow::Result<Option<f64>>;

    /// All (id, key) pairs of `field` in `scope`, ascending by (key, id).
    /// Sticky fields only list pinned rows.
    fn ordered_keys(&self, field: OrderField, scope: OrderScope)
        -> anyhow::Result<Vec<(ClipId, f64)>>;

    /// Apply several key updates in one transaction.
    fn update_keys(&self, updates: &[KeyUpdate]) -> anyhow::Result<()>;

    /// Headers whose parent is `parent` (`None` = top level), in no particular order.
    fn list_headers(&self, parent: Option<ClipId>) -> anyhow::Result<Vec<ClipHeader>>;
}
