use diesel::prelude::*;

use crate::db::schema::clip_data;

#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = clip_data)]
pub struct ClipDataRow {
    pub id: i64,
    pub clip_id: i64,
    pub format_name: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = clip_data)]
pub struct NewClipDataRow<'a> {
    pub clip_id: i64,
    pub format_name: &'a str,
    pub data: &'a [u8],
}
