use anyhow::{anyhow, Result};
use cs_core::{ClipFormat, ClipId, DataId, FormatId};

use crate::db::models::{ClipDataRow, NewClipDataRow};
use crate::db::ports::RowMapper;

pub struct ClipDataRowMapper;

impl ClipDataRowMapper {
    /// Borrowing insert row; the payload is not copied.
    pub fn to_new_row<'a>(&self, clip_id: ClipId, format: &'a ClipFormat) -> NewClipDataRow<'a> {
        NewClipDataRow {
            clip_id: clip_id.value(),
            format_name: format.format().as_str(),
            data: format.data(),
        }
    }
}

impl RowMapper<ClipDataRow, ClipFormat> for ClipDataRowMapper {
    fn to_domain(&self, row: &ClipDataRow) -> Result<ClipFormat> {
        let data_id = DataId::from_storage(row.id)
            .ok_or_else(|| anyhow!("invalid clip_data row id {}", row.id))?;
        let clip_id = ClipId::from_storage(row.clip_id)
            .ok_or_else(|| anyhow!("clip_data row {} has no parent clip", row.id))?;

        Ok(ClipFormat::loaded(
            FormatId::new(row.format_name.clone()),
            row.data.clone(),
            data_id,
            clip_id,
        ))
    }
}
