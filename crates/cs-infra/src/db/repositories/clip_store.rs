//! SQLite implementation of [`ClipStorePort`].
//!
//! Two tables: `clip` (one header row per clip) and `clip_data` (one row per
//! format payload). Every "max/min/next key" query orders by `(key, id)` so
//! ties resolve deterministically.

use anyhow::{bail, Result};
use cs_core::ids::NO_ID;
use cs_core::order::{OrderField, OrderScope, NOT_STICKY, STICKY_SCAN_EXCLUDED};
use cs_core::ports::{ClipStorePort, DuplicatePromotion, KeyUpdate};
use cs_core::{Checksum, ClipFormat, ClipFormatSet, ClipHeader, ClipId, DataId, FormatId};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use crate::db::mappers::{ClipDataRowMapper, ClipRowMapper};
use crate::db::models::{ClipDataRow, ClipRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::{clip, clip_data};

/// Bind `$col` to the column backing `$field` and evaluate `$body`.
///
/// Each arm is compiled separately, so `$body` may use `$col` with its
/// concrete column type.
macro_rules! with_order_column {
    ($field:expr, |$col:ident| $body:expr) => {
        match $field {
            OrderField::Clip => {
                let $col = clip::clip_order;
                $body
            }
            OrderField::ClipGroup => {
                let $col = clip::clip_group_order;
                $body
            }
            OrderField::Sticky => {
                let $col = clip::sticky_order;
                $body
            }
            OrderField::StickyGroup => {
                let $col = clip::sticky_group_order;
                $body
            }
        }
    };
}

/// `SELECT <col>[, id] FROM clip` narrowed to `scope`, skipping unpinned
/// rows for sticky fields.
macro_rules! scoped_keys {
    ($field:expr, $scope:expr, $col:ident, $selection:expr) => {{
        let mut query = clip::table.select($selection).into_boxed::<Sqlite>();
        query = match $scope {
            OrderScope::TopLevel => query.filter(clip::parent_id.eq(NO_ID)),
            OrderScope::Children(parent) => query.filter(clip::parent_id.eq(parent.value())),
        };
        if $field.is_sticky() {
            query = query.filter($col.ne(STICKY_SCAN_EXCLUDED));
        }
        query
    }};
}

pub struct DieselClipStore<E> {
    executor: E,
    clip_mapper: ClipRowMapper,
    data_mapper: ClipDataRowMapper,
}

impl<E> DieselClipStore<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            clip_mapper: ClipRowMapper,
            data_mapper: ClipDataRowMapper,
        }
    }
}

impl<E: DbExecutor> DieselClipStore<E> {
    fn insert_header(&self, conn: &mut SqliteConnection, header: &ClipHeader) -> Result<ClipId> {
        let row = self.clip_mapper.to_row(header)?;
        let id: i64 = diesel::insert_into(clip::table)
            .values(&row)
            .returning(clip::id)
            .get_result(conn)?;
        Ok(ClipId::new(id))
    }

    /// Formats are written last-to-first so `ORDER BY id DESC` returns them in set order.
    fn insert_formats(
        &self,
        conn: &mut SqliteConnection,
        id: ClipId,
        formats: &ClipFormatSet,
    ) -> Result<Vec<DataId>> {
        let mut data_ids = Vec::with_capacity(formats.len());
        for format in formats.iter().rev() {
            let row = self.data_mapper.to_new_row(id, format);
            let data_id: i64 = diesel::insert_into(clip_data::table)
                .values(&row)
                .returning(clip_data::id)
                .get_result(conn)?;
            data_ids.push(DataId::new(data_id));
        }
        data_ids.reverse();
        Ok(data_ids)
    }
}

impl<E: DbExecutor> ClipStorePort for DieselClipStore<E> {
    fn commit_header(&self, header: &ClipHeader) -> Result<ClipId> {
        self.executor.run(|conn| match header.id {
            None => {
                let id = self.insert_header(conn, header)?;
                debug!(clip_id = %id, "inserted clip header");
                Ok(id)
            }
            Some(id) => {
                let row = self.clip_mapper.to_row(header)?;
                let updated = diesel::update(clip::table.find(id.value()))
                    .set(&row)
                    .execute(conn)?;
                if updated == 0 {
                    bail!("clip {} not found", id);
                }
                debug!(clip_id = %id, "updated clip header");
                Ok(id)
            }
        })
    }

    fn commit_formats(&self, id: ClipId, formats: &ClipFormatSet) -> Result<Vec<DataId>> {
        self.executor
            .run_in_transaction(|conn| self.insert_formats(conn, id, formats))
    }

    fn insert_clip(&self, header: &ClipHeader, formats: &ClipFormatSet) -> Result<ClipId> {
        self.executor.run_in_transaction(|conn| {
            let id = self.insert_header(conn, header)?;
            self.insert_formats(conn, id, formats)?;
            debug!(clip_id = %id, formats = formats.len(), "inserted clip");
            Ok(id)
        })
    }

    fn replace_formats(
        &self,
        id: ClipId,
        formats: &ClipFormatSet,
        checksum: Checksum,
        description: Option<&str>,
    ) -> Result<()> {
        self.executor.run_in_transaction(|conn| {
            let target = clip::table.find(id.value());
            let updated = match description {
                Some(description) => diesel::update(target)
                    .set((
                        clip::checksum.eq(checksum.to_storage()),
                        clip::description.eq(description),
                    ))
                    .execute(conn)?,
                None => diesel::update(target)
                    .set(clip::checksum.eq(checksum.to_storage()))
                    .execute(conn)?,
            };
            if updated == 0 {
                bail!("clip {} not found", id);
            }

            diesel::delete(clip_data::table.filter(clip_data::clip_id.eq(id.value())))
                .execute(conn)?;
            self.insert_formats(conn, id, formats)?;
            Ok(())
        })
    }

    fn promote_duplicate(&self, id: ClipId, promotion: &DuplicatePromotion) -> Result<()> {
        self.executor.run(|conn| {
            let target = clip::table.find(id.value());
            let updated = match promotion.clip_group_order {
                Some(group_order) => diesel::update(target)
                    .set((
                        clip::clip_order.eq(promotion.clip_order),
                        clip::clip_group_order.eq(group_order),
                        clip::last_paste_at.eq(promotion.last_paste_at_ms),
                    ))
                    .execute(conn)?,
                None => diesel::update(target)
                    .set((
                        clip::clip_order.eq(promotion.clip_order),
                        clip::last_paste_at.eq(promotion.last_paste_at_ms),
                    ))
                    .execute(conn)?,
            };
            if updated == 0 {
                bail!("clip {} not found", id);
            }
            Ok(())
        })
    }

    fn find_by_checksum(&self, checksum: Checksum) -> Result<Option<ClipId>> {
        self.executor.run(|conn| {
            let id = clip::table
                .filter(clip::checksum.eq(checksum.to_storage()))
                .order(clip::id.asc())
                .select(clip::id)
                .first::<i64>(conn)
                .optional()?;
            Ok(id.map(ClipId::new))
        })
    }

    fn load_header(&self, id: ClipId) -> Result<Option<ClipHeader>> {
        self.executor.run(|conn| {
            let row = clip::table
                .find(id.value())
                .first::<ClipRow>(conn)
                .optional()?;

            match row {
                Some(row) => Ok(Some(self.clip_mapper.to_domain(&row)?)),
                None => Ok(None),
            }
        })
    }

    fn load_latest_header(&self) -> Result<Option<ClipHeader>> {
        self.executor.run(|conn| {
            let row = clip::table
                .order(clip::id.desc())
                .first::<ClipRow>(conn)
                .optional()?;

            row.map(|row| self.clip_mapper.to_domain(&row)).transpose()
        })
    }

    fn load_formats(&self, id: ClipId, text_only: bool) -> Result<ClipFormatSet> {
        self.executor.run(|conn| {
            let mut query = clip_data::table
                .filter(clip_data::clip_id.eq(id.value()))
                .into_boxed::<Sqlite>();
            if text_only {
                query = query.filter(
                    clip_data::format_name.eq_any([FormatId::UNICODE_TEXT, FormatId::TEXT]),
                );
            }
            let rows = query
                .order(clip_data::id.desc())
                .load::<ClipDataRow>(conn)?;

            rows.iter()
                .map(|row| self.data_mapper.to_domain(row))
                .collect()
        })
    }

    fn load_format(&self, id: ClipId, format: &FormatId) -> Result<Option<ClipFormat>> {
        self.executor.run(|conn| {
            let row = clip_data::table
                .filter(clip_data::clip_id.eq(id.value()))
                .filter(clip_data::format_name.eq(format.as_str()))
                .order(clip_data::id.desc())
                .first::<ClipDataRow>(conn)
                .optional()?;

            row.map(|row| self.data_mapper.to_domain(&row)).transpose()
        })
    }

    fn load_format_types(&self, id: ClipId) -> Result<Vec<FormatId>> {
        self.executor.run(|conn| {
            let names = clip_data::table
                .filter(clip_data::clip_id.eq(id.value()))
                .order(clip_data::id.desc())
                .select(clip_data::format_name)
                .load::<String>(conn)?;
            Ok(names.into_iter().map(FormatId::new).collect())
        })
    }

    fn max_key(&self, field: OrderField, scope: OrderScope) -> Result<Option<f64>> {
        self.executor.run(|conn| {
            with_order_column!(field, |col| {
                let key = scoped_keys!(field, scope, col, col)
                    .order((col.desc(), clip::id.desc()))
                    .first::<f64>(conn)
                    .optional()?;
                Ok(key)
            })
        })
    }

    fn min_key(&self, field: OrderField, scope: OrderScope) -> Result<Option<f64>> {
        self.executor.run(|conn| {
            with_order_column!(field, |col| {
                let key = scoped_keys!(field, scope, col, col)
                    .order((col.asc(), clip::id.asc()))
                    .first::<f64>(conn)
                    .optional()?;
                Ok(key)
            })
        })
    }

    fn next_key_above(&self, field: OrderField, scope: OrderScope, key: f64) -> Result<Option<f64>> {
        self.executor.run(|conn| {
            with_order_column!(field, |col| {
                let next = scoped_keys!(field, scope, col, col)
                    .filter(col.gt(key))
                    .order((col.asc(), clip::id.asc()))
                    .first::<f64>(conn)
                    .optional()?;
                Ok(next)
            })
        })
    }

    fn ordered_keys(&self, field: OrderField, scope: OrderScope) -> Result<Vec<(ClipId, f64)>> {
        self.executor.run(|conn| {
            with_order_column!(field, |col| {
                let rows = scoped_keys!(field, scope, col, (clip::id, col))
                    .order((col.asc(), clip::id.asc()))
                    .load::<(i64, f64)>(conn)?;
                Ok(rows
                    .into_iter()
                    .map(|(id, key)| (ClipId::new(id), key))
                    .collect())
            })
        })
    }

    fn update_keys(&self, updates: &[KeyUpdate]) -> Result<()> {
        self.executor.run_in_transaction(|conn| {
            for update in updates {
                let value = match (update.key, update.field.is_sticky()) {
                    (Some(key), _) => key,
                    (None, true) => NOT_STICKY,
                    (None, false) => continue,
                };
                let target = clip::table.find(update.id.value());
                let updated = with_order_column!(update.field, |col| {
                    diesel::update(target).set(col.eq(value)).execute(conn)?
                });
                if updated == 0 {
                    bail!("clip {} not found", update.id);
                }
            }
            Ok(())
        })
    }

    fn list_headers(&self, parent: Option<ClipId>) -> Result<Vec<ClipHeader>> {
        self.executor.run(|conn| {
            let rows = clip::table
                .filter(clip::parent_id.eq(ClipId::to_storage(parent)))
                .load::<ClipRow>(conn)?;

            rows.iter()
                .map(|row| self.clip_mapper.to_domain(row))
                .collect()
        })
    }
}
