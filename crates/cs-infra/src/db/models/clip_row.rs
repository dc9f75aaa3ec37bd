use diesel::prelude::*;

use crate::db::schema::clip;

/// Field order matches the `clip` table.
#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = clip)]
pub struct ClipRow {
    pub id: i64,
    pub created_at: i64,
    pub last_paste_at: i64,
    pub description: String,
    pub checksum: i64,
    pub parent_id: i64,
    pub is_group: bool,
    pub quick_paste: String,
    pub shortcut: i32,
    pub global_shortcut: bool,
    pub dont_auto_delete: bool,
    pub clip_order: f64,
    pub clip_group_order: f64,
    pub sticky_order: f64,
    pub sticky_group_order: f64,
}

/// Every column except the row id; used for inserts and full-row updates.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = clip)]
pub struct NewClipRow {
    pub created_at: i64,
    pub last_paste_at: i64,
    pub description: String,
    pub checksum: i64,
    pub parent_id: i64,
    pub is_group: bool,
    pub quick_paste: String,
    pub shortcut: i32,
    pub global_shortcut: bool,
    pub dont_auto_delete: bool,
    pub clip_order: f64,
    pub clip_group_order: f64,
    pub sticky_order: f64,
    pub sticky_group_order: f64,
}
