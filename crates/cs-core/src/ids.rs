//! Row identity wrappers for type safety.
//!
//! Clips and their format rows are addressed by the integer row ids the store
//! hands out on insert. "Not yet committed" and "top-level" are modelled as
//! `Option<ClipId>` in the domain; [`NO_ID`] is only their storage encoding.

use serde::{Deserialize, Serialize};

/// Storage encoding for an absent id (uncommitted clip, top-level parent).
pub const NO_ID: i64 = -1;

macro_rules! impl_row_id {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                pub fn new(value: i64) -> Self {
                    Self(value)
                }

                pub fn value(&self) -> i64 {
                    self.0
                }

                /// Decode a nullable id column that uses [`NO_ID`] (or any negative value) for "none".
                pub fn from_storage(value: i64) -> Option<Self> {
                    (value >= 0).then_some(Self(value))
                }

                pub fn to_storage(id: Option<Self>) -> i64 {
                    id.map(|id| id.0).unwrap_or(NO_ID)
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<i64> for $name {
                fn from(value: i64) -> Self {
                    Self(value)
                }
            }

            impl From<$name> for i64 {
                fn from(id: $name) -> i64 {
                    id.0
                }
            }
        )*
    };
}

/// Identity of a clip header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClipId(i64);

/// Identity of one persisted format (data) row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DataId(i64);

impl_row_id!(ClipId, DataId);
