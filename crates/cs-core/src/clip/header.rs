use serde::{Deserialize, Serialize};

use crate::clip::Checksum;
use crate::ids::ClipId;
use crate::order::OrderKeys;

/// Metadata row of a clip: everything except the format payloads.
///
/// 剪贴条目的元数据（不含格式内容）。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClipHeader {
    /// `None` until the first commit assigns a row id.
    pub id: Option<ClipId>,
    pub created_at_ms: i64,
    pub last_paste_at_ms: i64,
    pub description: String,
    pub checksum: Checksum,
    /// `None` for a top-level clip.
    pub parent_id: Option<ClipId>,
    pub is_group: bool,
    pub quick_paste: String,
    /// Keyboard shortcut binding, 0 when unbound.
    pub shortcut: i32,
    pub global_shortcut: bool,
    pub dont_auto_delete: bool,
    pub order: OrderKeys,
}

impl ClipHeader {
    pub fn is_committed(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}
