use super::*;
use crate::db::ports::DbExecutor;
use cs_core::clip::text::encode_wide;
use cs_core::order::OrderKeys;
use cs_core::ports::{ClipStorePort, DuplicatePromotion, KeyUpdate};
use cs_core::{Checksum, ClipFormat, ClipFormatSet, ClipHeader, ClipId, FormatId, OrderField, OrderScope};
use std::sync::Arc;

/// In-memory test executor for testing repositories.
#[derive(Clone)]
struct TestDbExecutor {
    pool: Arc<crate::db::pool::DbPool>,
}

impl TestDbExecutor {
    fn new() -> Self {
        let pool = Arc::new(
            crate::db::pool::init_db_pool(":memory:").expect("Failed to create test DB pool"),
        );
        Self { pool }
    }
}

impl DbExecutor for TestDbExecutor {
    fn run<T>(
        &self,
        f: impl FnOnce(&mut diesel::SqliteConnection) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let mut conn = self.pool.get()?;
        f(&mut conn)
    }
}

fn store() -> DieselClipStore<TestDbExecutor> {
    DieselClipStore::new(TestDbExecutor::new())
}

fn formats(entries: &[(&str, &[u8])]) -> ClipFormatSet {
    entries
        .iter()
        .map(|(name, bytes)| ClipFormat::new(FormatId::from(*name), bytes.to_vec()))
        .collect()
}

fn header(clip_order: f64, parent: Option<ClipId>) -> ClipHeader {
    ClipHeader {
        created_at_ms: 1_000,
        description: format!("clip at {}", clip_order),
        parent_id: parent,
        order: OrderKeys {
            clip_order,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn insert(store: &DieselClipStore<TestDbExecutor>, header: ClipHeader, payload: &[u8]) -> ClipId {
    store
        .insert_clip(&header, &formats(&[("CF_TEXT", payload)]))
        .unwrap()
}

#[test]
fn test_insert_clip_roundtrips_header_and_format_order() {
    let store = store();
    let set = formats(&[
        ("CF_UNICODETEXT", &encode_wide("Hello")),
        ("CF_HDROP", b"/tmp/a.txt"),
        ("HTML Format", b"<b>Hello</b>"),
    ]);
    let mut header = header(0.0, None);
    header.checksum = set.checksum();

    let id = store.insert_clip(&header, &set).unwrap();

    let loaded = store.load_header(id).unwrap().unwrap();
    assert_eq!(loaded.id, Some(id));
    assert_eq!(loaded.description, "clip at 0");
    assert_eq!(loaded.order.sticky_order, None);
    assert_eq!(loaded.parent_id, None);

    let loaded_formats = store.load_formats(id, false).unwrap();
    assert_eq!(loaded_formats.format_ids(), set.format_ids());
    assert_eq!(loaded_formats.checksum(), loaded.checksum);
    assert!(loaded_formats.iter().all(|f| f.parent_id == Some(id)));
}

#[test]
fn test_load_formats_text_only_and_single_format() {
    let store = store();
    let id = store
        .insert_clip(
            &header(0.0, None),
            &formats(&[("CF_UNICODETEXT", b"h\0\0\0"), ("CF_TEXT", b"h\0"), ("PNG", b"\x89PNG")]),
        )
        .unwrap();

    let text = store.load_formats(id, true).unwrap();
    assert_eq!(text.format_ids(), vec![FormatId::unicode_text(), FormatId::text()]);

    let png = store.load_format(id, &FormatId::from("PNG")).unwrap().unwrap();
    assert_eq!(png.data(), b"\x89PNG");
    assert!(store.load_format(id, &FormatId::from("RTF")).unwrap().is_none());

    assert_eq!(
        store.load_format_types(id).unwrap(),
        vec![FormatId::unicode_text(), FormatId::text(), FormatId::from("PNG")]
    );
}

#[test]
fn test_commit_header_inserts_then_updates() {
    let store = store();
    let mut header = header(1.0, None);

    let id = store.commit_header(&header).unwrap();
    header.id = Some(id);
    header.description = "renamed".into();
    header.shortcut = 42;
    header.order.sticky_order = Some(3.0);

    assert_eq!(store.commit_header(&header).unwrap(), id);

    let loaded = store.load_header(id).unwrap().unwrap();
    assert_eq!(loaded.description, "renamed");
    assert_eq!(loaded.shortcut, 42);
    assert_eq!(loaded.order.sticky_order, Some(3.0));
}

#[test]
fn test_commit_header_for_missing_row_fails() {
    let store = store();
    let mut header = header(1.0, None);
    header.id = Some(ClipId::new(99));

    assert!(store.commit_header(&header).is_err());
}

#[test]
fn test_commit_formats_appends_rows() {
    let store = store();
    let id = store.commit_header(&header(0.0, None)).unwrap();

    let data_ids = store
        .commit_formats(id, &formats(&[("A", b"a"), ("B", b"b")]))
        .unwrap();

    assert_eq!(data_ids.len(), 2);
    assert!(data_ids[0] > data_ids[1]);
    assert_eq!(
        store.load_format_types(id).unwrap(),
        vec![FormatId::from("A"), FormatId::from("B")]
    );
}

#[test]
fn test_find_by_checksum_returns_first_match() {
    let store = store();
    let mut first = header(0.0, None);
    first.checksum = Checksum::new(7);
    let mut second = header(1.0, None);
    second.checksum = Checksum::new(7);

    let first_id = insert(&store, first, b"x");
    insert(&store, second, b"x");

    assert_eq!(store.find_by_checksum(Checksum::new(7)).unwrap(), Some(first_id));
    assert_eq!(store.find_by_checksum(Checksum::new(8)).unwrap(), None);
}

#[test]
fn test_load_latest_header_returns_highest_id() {
    let store = store();
    assert!(store.load_latest_header().unwrap().is_none());

    insert(&store, header(5.0, None), b"old");
    let mut newest = header(1.0, None);
    newest.checksum = Checksum::new(42);
    let newest_id = insert(&store, newest, b"new");

    let latest = store.load_latest_header().unwrap().unwrap();
    assert_eq!(latest.id, Some(newest_id));
    assert_eq!(latest.checksum, Checksum::new(42));
}

#[test]
fn test_promote_duplicate_touches_header_only() {
    let store = store();
    let id = insert(&store, header(0.0, None), b"payload");

    store
        .promote_duplicate(
            id,
            &DuplicatePromotion {
                clip_order: 5.0,
                clip_group_order: None,
                last_paste_at_ms: 777,
            },
        )
        .unwrap();

    let loaded = store.load_header(id).unwrap().unwrap();
    assert_eq!(loaded.order.clip_order, 5.0);
    assert_eq!(loaded.last_paste_at_ms, 777);
    assert_eq!(store.load_formats(id, false).unwrap().len(), 1);
}

#[test]
fn test_replace_formats_swaps_payloads_and_checksum() {
    let store = store();
    let id = insert(&store, header(0.0, None), b"old");
    let new_set = formats(&[("CF_TEXT", b"new\0")]);

    store
        .replace_formats(id, &new_set, new_set.checksum(), Some("new"))
        .unwrap();

    let loaded = store.load_header(id).unwrap().unwrap();
    assert_eq!(loaded.checksum, new_set.checksum());
    assert_eq!(loaded.description, "new");
    let formats = store.load_formats(id, false).unwrap();
    assert_eq!(formats.len(), 1);
    assert_eq!(formats.first().unwrap().data(), b"new\0");
}

#[test]
fn test_key_scans_respect_scope() {
    let store = store();
    let parent = insert(&store, header(10.0, None), b"p");
    insert(&store, header(3.0, None), b"a");

    let mut child = header(11.0, Some(parent));
    child.order.clip_group_order = 4.0;
    insert(&store, child, b"c");

    // the child's primary key is not part of the top-level list
    assert_eq!(store.max_key(OrderField::Clip, OrderScope::TopLevel).unwrap(), Some(10.0));
    assert_eq!(store.min_key(OrderField::Clip, OrderScope::TopLevel).unwrap(), Some(3.0));
    assert_eq!(
        store
            .max_key(OrderField::ClipGroup, OrderScope::Children(parent))
            .unwrap(),
        Some(4.0)
    );
    assert_eq!(
        store
            .max_key(OrderField::ClipGroup, OrderScope::Children(ClipId::new(999)))
            .unwrap(),
        None
    );
}

#[test]
fn test_sticky_scans_skip_unpinned_rows() {
    let store = store();
    insert(&store, header(0.0, None), b"a");
    assert_eq!(store.max_key(OrderField::Sticky, OrderScope::TopLevel).unwrap(), None);
    assert_eq!(store.min_key(OrderField::Sticky, OrderScope::TopLevel).unwrap(), None);

    let mut pinned = header(1.0, None);
    pinned.order.sticky_order = Some(2.0);
    insert(&store, pinned, b"b");

    assert_eq!(store.min_key(OrderField::Sticky, OrderScope::TopLevel).unwrap(), Some(2.0));
    assert_eq!(
        store.ordered_keys(OrderField::Sticky, OrderScope::TopLevel).unwrap().len(),
        1
    );
}

#[test]
fn test_next_key_above_and_ordered_keys_break_ties_by_id() {
    let store = store();
    let a = insert(&store, header(1.0, None), b"a");
    let b = insert(&store, header(2.0, None), b"b");
    let c = insert(&store, header(2.0, None), b"c");
    let d = insert(&store, header(5.0, None), b"d");

    assert_eq!(
        store.next_key_above(OrderField::Clip, OrderScope::TopLevel, 1.0).unwrap(),
        Some(2.0)
    );
    assert_eq!(
        store.next_key_above(OrderField::Clip, OrderScope::TopLevel, 2.0).unwrap(),
        Some(5.0)
    );
    assert_eq!(
        store.next_key_above(OrderField::Clip, OrderScope::TopLevel, 5.0).unwrap(),
        None
    );

    let ordered: Vec<ClipId> = store
        .ordered_keys(OrderField::Clip, OrderScope::TopLevel)
        .unwrap()
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(ordered, vec![a, b, c, d]);
}

#[test]
fn test_update_keys_pins_and_unpins() {
    let store = store();
    let id = insert(&store, header(0.0, None), b"a");

    store
        .update_keys(&[
            KeyUpdate {
                id,
                field: OrderField::Sticky,
                key: Some(1.0),
            },
            KeyUpdate {
                id,
                field: OrderField::Clip,
                key: Some(9.0),
            },
        ])
        .unwrap();
    let loaded = store.load_header(id).unwrap().unwrap();
    assert_eq!(loaded.order.sticky_order, Some(1.0));
    assert_eq!(loaded.order.clip_order, 9.0);

    store
        .update_keys(&[KeyUpdate {
            id,
            field: OrderField::Sticky,
            key: None,
        }])
        .unwrap();
    assert_eq!(store.load_header(id).unwrap().unwrap().order.sticky_order, None);
}

#[test]
fn test_update_keys_is_atomic() {
    let store = store();
    let id = insert(&store, header(0.0, None), b"a");

    let result = store.update_keys(&[
        KeyUpdate {
            id,
            field: OrderField::Clip,
            key: Some(9.0),
        },
        KeyUpdate {
            id: ClipId::new(12345),
            field: OrderField::Clip,
            key: Some(1.0),
        },
    ]);

    assert!(result.is_err());
    assert_eq!(store.load_header(id).unwrap().unwrap().order.clip_order, 0.0);
}

#[test]
fn test_list_headers_by_parent() {
    let store = store();
    let parent = insert(&store, header(0.0, None), b"p");
    insert(&store, header(1.0, None), b"q");
    insert(&store, header(2.0, Some(parent)), b"c");

    assert_eq!(store.list_headers(None).unwrap().len(), 2);
    assert_eq!(store.list_headers(Some(parent)).unwrap().len(), 1);
}
