//! In-memory port fakes shared by the unit tests of this crate.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, bail, Result};
use cs_core::order::NOT_STICKY;
use cs_core::ports::{
    ClipStorePort, ClipboardSnapshotPort, ClipboardSourcePort, ClockPort,
    DuplicatePromotion, KeyUpdate,
};
use cs_core::{
    Checksum, ClipFormat, ClipFormatSet, ClipHeader, ClipId, DataId, FormatId, OrderField,
    OrderScope,
};

#[derive(Default)]
struct StoreState {
    headers: BTreeMap<ClipId, ClipHeader>,
    /// (data id, clip id, format, payload) in insertion order.
    data: Vec<(DataId, ClipId, FormatId, Vec<u8>)>,
    next_clip_id: i64,
    next_data_id: i64,
}

impl StoreState {
    fn insert_header(&mut self, header: &ClipHeader) -> ClipId {
        self.next_clip_id += 1;
        let id = ClipId::new(self.next_clip_id);
        let mut stored = header.clone();
        stored.id = Some(id);
        self.headers.insert(id, stored);
        id
    }

    fn insert_formats(&mut self, id: ClipId, formats: &ClipFormatSet) -> Vec<DataId> {
        let mut ids = Vec::new();
        for format in formats.iter().rev() {
            self.next_data_id += 1;
            let data_id = DataId::new(self.next_data_id);
            self.data
                .push((data_id, id, format.format().clone(), format.data().to_vec()));
            ids.push(data_id);
        }
        ids.reverse();
        ids
    }

    fn keys(&self, field: OrderField, scope: OrderScope) -> Vec<(ClipId, f64)> {
        let mut keys: Vec<(ClipId, f64)> = self
            .headers
            .values()
            .filter(|h| match scope {
                OrderScope::TopLevel => h.parent_id.is_none(),
                OrderScope::Children(parent) => h.parent_id == Some(parent),
            })
            .filter_map(|h| Some((h.id?, h.order.get(field)?)))
            .filter(|(_, key)| !field.is_sticky() || *key != NOT_STICKY)
            .collect();
        keys.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        keys
    }
}

/// Hand-written [`ClipStorePort`] fake backed by a `BTreeMap`.
#[derive(Default)]
pub struct InMemoryClipStore {
    state: Mutex<StoreState>,
    fail_writes: AtomicBool,
}

impl InMemoryClipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Insert a header directly and return it with its new id.
    pub fn seed(&self, header: ClipHeader) -> ClipHeader {
        let mut state = self.state.lock().unwrap();
        let id = state.insert_header(&header);
        state.headers[&id].clone()
    }

    pub fn seed_update(&self, header: &ClipHeader) {
        let id = header.id.unwrap();
        self.state.lock().unwrap().headers.insert(id, header.clone());
    }

    pub fn apply(&self, update: &KeyUpdate) {
        self.update_keys(std::slice::from_ref(update)).unwrap();
    }

    pub fn header(&self, id: ClipId) -> ClipHeader {
        self.state.lock().unwrap().headers[&id].clone()
    }

    pub fn header_count(&self) -> usize {
        self.state.lock().unwrap().headers.len()
    }

    pub fn format_row_count(&self) -> usize {
        self.state.lock().unwrap().data.len()
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            bail!("store is read-only");
        }
        Ok(())
    }
}

impl ClipStorePort for InMemoryClipStore {
    fn commit_header(&self, header: &ClipHeader) -> Result<ClipId> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        match header.id {
            None => Ok(state.insert_header(header)),
            Some(id) => {
                let slot = state
                    .headers
                    .get_mut(&id)
                    .ok_or_else(|| anyhow!("clip {} not found", id))?;
                *slot = header.clone();
                Ok(id)
            }
        }
    }

    fn commit_formats(&self, id: ClipId, formats: &ClipFormatSet) -> Result<Vec<DataId>> {
        self.check_writable()?;
        Ok(self.state.lock().unwrap().insert_formats(id, formats))
    }

    fn insert_clip(&self, header: &ClipHeader, formats: &ClipFormatSet) -> Result<ClipId> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        let id = state.insert_header(header);
        state.insert_formats(id, formats);
        Ok(id)
    }

    fn replace_formats(
        &self,
        id: ClipId,
        formats: &ClipFormatSet,
        checksum: Checksum,
        description: Option<&str>,
    ) -> Result<()> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        let header = state
            .headers
            .get_mut(&id)
            .ok_or_else(|| anyhow!("clip {} not found", id))?;
        header.checksum = checksum;
        if let Some(description) = description {
            header.description = description.to_string();
        }
        state.data.retain(|(_, clip_id, _, _)| *clip_id != id);
        state.insert_formats(id, formats);
        Ok(())
    }

    fn promote_duplicate(&self, id: ClipId, promotion: &DuplicatePromotion) -> Result<()> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        let header = state
            .headers
            .get_mut(&id)
            .ok_or_else(|| anyhow!("clip {} not found", id))?;
        header.order.clip_order = promotion.clip_order;
        if let Some(group) = promotion.clip_group_order {
            header.order.clip_group_order = group;
        }
        header.last_paste_at_ms = promotion.last_paste_at_ms;
        Ok(())
    }

    fn find_by_checksum(&self, checksum: Checksum) -> Result<Option<ClipId>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .headers
            .values()
            .find(|h| h.checksum == checksum)
            .and_then(|h| h.id))
    }

    fn load_header(&self, id: ClipId) -> Result<Option<ClipHeader>> {
        Ok(self.state.lock().unwrap().headers.get(&id).cloned())
    }

    fn load_latest_header(&self) -> Result<Option<ClipHeader>> {
        let state = self.state.lock().unwrap();
        Ok(state.headers.values().next_back().cloned())
    }

    fn load_formats(&self, id: ClipId, text_only: bool) -> Result<ClipFormatSet> {
        let state = self.state.lock().unwrap();
        Ok(state
            .data
            .iter()
            .rev()
            .filter(|(_, clip_id, format, _)| {
                *clip_id == id && (!text_only || format.is_any_text())
            })
            .map(|(data_id, clip_id, format, bytes)| {
                ClipFormat::loaded(format.clone(), bytes.clone(), *data_id, *clip_id)
            })
            .collect())
    }

    fn load_format(&self, id: ClipId, format: &FormatId) -> Result<Option<ClipFormat>> {
        Ok(self
            .load_formats(id, false)?
            .into_iter()
            .find(|f| f.format() == format))
    }

    fn load_format_types(&self, id: ClipId) -> Result<Vec<FormatId>> {
        Ok(self.load_formats(id, false)?.format_ids())
    }

    fn max_key(&self, field: OrderField, scope: OrderScope) -> Result<Option<f64>> {
        let state = self.state.lock().unwrap();
        Ok(state.keys(field, scope).last().map(|(_, key)| *key))
    }

    fn min_key(&self, field: OrderField, scope: OrderScope) -> Result<Option<f64>> {
        let state = self.state.lock().unwrap();
        Ok(state.keys(field, scope).first().map(|(_, key)| *key))
    }

    fn next_key_above(
        &self,
        field: OrderField,
        scope: OrderScope,
        key: f64,
    ) -> Result<Option<f64>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .keys(field, scope)
            .into_iter()
            .map(|(_, k)| k)
            .find(|k| *k > key))
    }

    fn ordered_keys(&self, field: OrderField, scope: OrderScope) -> Result<Vec<(ClipId, f64)>> {
        Ok(self.state.lock().unwrap().keys(field, scope))
    }

    fn update_keys(&self, updates: &[KeyUpdate]) -> Result<()> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        if let Some(missing) = updates.iter().find(|u| !state.headers.contains_key(&u.id)) {
            bail!("clip {} not found", missing.id);
        }
        for update in updates {
            if let Some(header) = state.headers.get_mut(&update.id) {
                header.order.set(update.field, update.key);
            }
        }
        Ok(())
    }

    fn list_headers(&self, parent: Option<ClipId>) -> Result<Vec<ClipHeader>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .headers
            .values()
            .filter(|h| h.parent_id == parent)
            .cloned()
            .collect())
    }
}

/// Clipboard fake that counts fetches per format.
#[derive(Default)]
pub struct FakeClipboard {
    formats: Vec<(FormatId, Vec<u8>)>,
    fail_attach: bool,
    fetches: RefCell<Vec<FormatId>>,
    attached: Cell<bool>,
}

impl FakeClipboard {
    pub fn with(formats: Vec<(FormatId, Vec<u8>)>) -> Self {
        Self {
            formats,
            ..Default::default()
        }
    }

    pub fn failing_attach() -> Self {
        Self {
            fail_attach: true,
            ..Default::default()
        }
    }

    pub fn fetch_count(&self, format: &FormatId) -> usize {
        self.fetches.borrow().iter().filter(|f| *f == format).count()
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    fn offers(&self, format: &FormatId) -> bool {
        self.formats.iter().any(|(f, _)| f == format)
    }
}

impl ClipboardSourcePort for FakeClipboard {
    fn is_format_available(&self, format: &FormatId) -> bool {
        self.offers(format)
    }

    fn attach(&self) -> Result<Box<dyn ClipboardSnapshotPort + '_>> {
        if self.fail_attach {
            bail!("clipboard is locked by another process");
        }
        self.attached.set(true);
        Ok(Box::new(FakeSnapshot { source: self }))
    }

    fn format_name(&self, format: &FormatId) -> String {
        format!("name of {}", format)
    }
}

struct FakeSnapshot<'a> {
    source: &'a FakeClipboard,
}

impl ClipboardSnapshotPort for FakeSnapshot<'_> {
    fn is_format_available(&self, format: &FormatId) -> bool {
        self.source.offers(format)
    }

    fn available_formats(&self) -> Vec<FormatId> {
        self.source.formats.iter().map(|(f, _)| f.clone()).collect()
    }

    fn fetch(&self, format: &FormatId) -> Result<Option<Vec<u8>>> {
        self.source.fetches.borrow_mut().push(format.clone());
        Ok(self
            .source
            .formats
            .iter()
            .find(|(f, _)| f == format)
            .map(|(_, bytes)| bytes.clone()))
    }
}

impl Drop for FakeSnapshot<'_> {
    fn drop(&mut self) {
        self.source.attached.set(false);
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}
