//! Order keys and fractional-indexing arithmetic.
//!
//! Every clip carries real-valued keys; the visible order is derived purely by
//! comparing them. Moving a clip means computing one new key between two
//! neighbours, never renumbering the rest of the collection.
//!
//! Two independent orders exist:
//! - the primary order (`clip_order` for the main list, `clip_group_order`
//!   among the children of one parent), and
//! - the sticky order (`sticky_order` / `sticky_group_order`), a separate band
//!   holding pinned clips only.

mod keys;

pub use keys::*;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::clip::ClipHeader;
use crate::ids::ClipId;

/// Storage value of an unpinned sticky key.
///
/// Pinned keys never take this value; min/max scans over sticky columns skip it.
pub const NOT_STICKY: f64 = -10_000_000.0;

/// Sticky value left out of every min/max/next scan over a sticky band.
pub const STICKY_SCAN_EXCLUDED: f64 = NOT_STICKY;

/// The four order keys of a clip.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderKeys {
    pub clip_order: f64,
    /// Meaningful only for clips with a parent.
    pub clip_group_order: f64,
    /// `None` when the clip is not pinned in the top-level band.
    pub sticky_order: Option<f64>,
    /// `None` when the clip is not pinned in its parent's band.
    pub sticky_group_order: Option<f64>,
}

impl OrderKeys {
    pub fn get(&self, field: OrderField) -> Option<f64> {
        match field {
            OrderField::Clip => Some(self.clip_order),
            OrderField::ClipGroup => Some(self.clip_group_order),
            OrderField::Sticky => self.sticky_order,
            OrderField::StickyGroup => self.sticky_group_order,
        }
    }

    /// Set a key. `None` unpins a sticky field and is ignored for primary fields.
    pub fn set(&mut self, field: OrderField, key: Option<f64>) {
        match field {
            OrderField::Clip => {
                if let Some(key) = key {
                    self.clip_order = key;
                }
            }
            OrderField::ClipGroup => {
                if let Some(key) = key {
                    self.clip_group_order = key;
                }
            }
            OrderField::Sticky => self.sticky_order = key,
            OrderField::StickyGroup => self.sticky_group_order = key,
        }
    }
}

/// Which order key a query or update addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderField {
    Clip,
    ClipGroup,
    Sticky,
    StickyGroup,
}

impl OrderField {
    pub fn is_sticky(self) -> bool {
        matches!(self, OrderField::Sticky | OrderField::StickyGroup)
    }
}

/// Set of clips a max/min/next scan runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderScope {
    /// Clips without a parent: the main list as it is shown.
    TopLevel,
    /// Children of one group clip.
    Children(ClipId),
}

/// A key field together with the scope its values are compared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBand {
    pub field: OrderField,
    pub scope: OrderScope,
}

impl OrderBand {
    /// Primary band of a clip: the main list, or its parent's children.
    pub fn primary_for(parent_id: Option<ClipId>) -> Self {
        match parent_id {
            None => Self {
                field: OrderField::Clip,
                scope: OrderScope::TopLevel,
            },
            Some(parent) => Self {
                field: OrderField::ClipGroup,
                scope: OrderScope::Children(parent),
            },
        }
    }

    /// Sticky band a clip participates in, determined by its parent.
    pub fn sticky_for(parent_id: Option<ClipId>) -> Self {
        match parent_id {
            None => Self {
                field: OrderField::Sticky,
                scope: OrderScope::TopLevel,
            },
            Some(parent) => Self {
                field: OrderField::StickyGroup,
                scope: OrderScope::Children(parent),
            },
        }
    }
}

/// Encode a sticky key for a column that uses [`NOT_STICKY`].
pub fn sticky_to_storage(key: Option<f64>) -> f64 {
    key.unwrap_or(NOT_STICKY)
}

pub fn sticky_from_storage(value: f64) -> Option<f64> {
    (value != NOT_STICKY).then_some(value)
}

/// Visible ordering of two sibling clips, topmost first.
///
/// Pinned clips come before unpinned ones and sort among themselves by sticky
/// key; everything else sorts by its primary (or group) key. The row id breaks
/// ties so the result is deterministic.
pub fn visible_cmp(a: &ClipHeader, b: &ClipHeader) -> Ordering {
    let sticky_a = a.order.get(OrderBand::sticky_for(a.parent_id).field);
    let sticky_b = b.order.get(OrderBand::sticky_for(b.parent_id).field);

    let sticky = match (sticky_a, sticky_b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    sticky
        .then_with(|| {
            let field = OrderBand::primary_for(a.parent_id).field;
            let x = a.order.get(field).unwrap_or_default();
            let y = b.order.get(field).unwrap_or_default();
            y.total_cmp(&x)
        })
        .then_with(|| b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(id: i64, clip_order: f64, sticky: Option<f64>) -> ClipHeader {
        let mut header = ClipHeader::default();
        header.id = Some(ClipId::new(id));
        header.order.clip_order = clip_order;
        header.order.sticky_order = sticky;
        header
    }

    #[test]
    fn sticky_storage_roundtrip() {
        assert_eq!(sticky_to_storage(None), NOT_STICKY);
        assert_eq!(sticky_from_storage(NOT_STICKY), None);
        assert_eq!(sticky_from_storage(2.5), Some(2.5));
    }

    #[test]
    fn bands_follow_parent() {
        let parent = ClipId::new(4);
        assert_eq!(OrderBand::primary_for(None).field, OrderField::Clip);
        assert_eq!(
            OrderBand::primary_for(Some(parent)),
            OrderBand {
                field: OrderField::ClipGroup,
                scope: OrderScope::Children(parent)
            }
        );
        assert_eq!(OrderBand::sticky_for(Some(parent)).field, OrderField::StickyGroup);
    }

    #[test]
    fn pinned_clips_sort_above_unpinned() {
        let mut clips = vec![
            header(1, 10.0, None),
            header(2, 1.0, Some(1.0)),
            header(3, 5.0, Some(2.0)),
            header(4, 20.0, None),
        ];
        clips.sort_by(visible_cmp);

        let ids: Vec<i64> = clips.iter().map(|c| c.id.unwrap().value()).collect();
        assert_eq!(ids, vec![3, 2, 4, 1]);
    }

    #[test]
    fn equal_keys_fall_back_to_newest_id() {
        let mut clips = vec![header(1, 3.0, None), header(2, 3.0, None)];
        clips.sort_by(visible_cmp);
        assert_eq!(clips[0].id, Some(ClipId::new(2)));
    }

    #[test]
    fn set_none_only_unpins_sticky_fields() {
        let mut keys = OrderKeys {
            clip_order: 3.0,
            clip_group_order: 1.0,
            sticky_order: Some(2.0),
            sticky_group_order: None,
        };
        keys.set(OrderField::Clip, None);
        keys.set(OrderField::Sticky, None);

        assert_eq!(keys.clip_order, 3.0);
        assert_eq!(keys.sticky_order, None);
    }
}
