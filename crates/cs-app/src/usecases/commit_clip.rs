use std::path::PathBuf;
use std::sync::Arc;

use cs_core::ports::{ClipStorePort, ClockPort, CommitSoundPort, DuplicatePromotion};
use cs_core::{Checksum, Clip, ClipError, ClipHeader, ClipId, DedupMode};
use tracing::{debug, info, info_span, warn};

use crate::order_engine::OrderEngine;

/// Clip committed last in this session, consulted in allow-duplicates mode.
///
/// 本次会话最后提交的条目（允许重复模式下用于去重）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupSession {
    last: Option<(Checksum, ClipId)>,
}

impl DedupSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_committed(&self) -> Option<(Checksum, ClipId)> {
        self.last
    }

    fn record(&mut self, checksum: Checksum, id: ClipId) {
        self.last = Some((checksum, id));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new header and its formats were stored.
    Inserted(ClipId),
    /// The content already existed; that clip was moved to the top instead.
    Promoted(ClipId),
}

impl CommitOutcome {
    pub fn id(&self) -> ClipId {
        match self {
            CommitOutcome::Inserted(id) | CommitOutcome::Promoted(id) => *id,
        }
    }
}

/// Persist a clip, or promote the stored clip it duplicates.
///
/// # Behavior / 行为
/// - Compute the content checksum
/// - Look for a duplicate according to [`DedupMode`]
/// - Duplicate: push fresh latest order keys and last-paste time onto the
///   existing row; its formats are left untouched
/// - New: insert header and formats in one store call, then release the
///   in-memory buffers and play the commit sound
///
/// The clip is only modified after the store accepted the change.
pub struct CommitClipUseCase {
    store: Arc<dyn ClipStorePort>,
    clock: Arc<dyn ClockPort>,
    sound: Arc<dyn CommitSoundPort>,
    engine: OrderEngine,
    mode: DedupMode,
    sound_path: Option<PathBuf>,
}

impl CommitClipUseCase {
    pub fn new(
        store: Arc<dyn ClipStorePort>,
        clock: Arc<dyn ClockPort>,
        sound: Arc<dyn CommitSoundPort>,
        mode: DedupMode,
        sound_path: Option<PathBuf>,
    ) -> Self {
        Self {
            engine: OrderEngine::new(store.clone()),
            store,
            clock,
            sound,
            mode,
            sound_path,
        }
    }

    /// Start a session that continues from the most recently inserted clip,
    /// so allow-duplicates mode folds a copy made by an earlier process.
    ///
    /// 从最近插入的条目恢复会话，使跨进程的连续重复也能合并。
    pub fn resume_session(&self) -> Result<DedupSession, ClipError> {
        let latest = self.store.load_latest_header().map_err(|e| {
            warn!(error = %e, "failed to load latest clip for dedup session");
            ClipError::store(e)
        })?;

        let mut session = DedupSession::new();
        if let Some(ClipHeader {
            id: Some(id),
            checksum,
            ..
        }) = latest
        {
            debug!(clip_id = %id, checksum = %checksum, "resumed dedup session");
            session.record(checksum, id);
        }
        Ok(session)
    }

    pub fn execute(
        &self,
        clip: &mut Clip,
        session: &mut DedupSession,
    ) -> Result<CommitOutcome, ClipError> {
        let span = info_span!("usecase.commit_clip.execute", mode = ?self.mode);
        let _enter = span.enter();

        if !clip.is_valid() {
            warn!("refusing to commit a clip without formats");
            return Err(ClipError::InvalidClip);
        }

        let checksum = clip.checksum();

        match self.find_duplicate(checksum, session)? {
            Some(existing) => self.promote(clip, existing, checksum),
            None => self.insert(clip, checksum, session),
        }
    }

    fn find_duplicate(
        &self,
        checksum: Checksum,
        session: &DedupSession,
    ) -> Result<Option<ClipId>, ClipError> {
        match self.mode {
            DedupMode::AllowDuplicates => Ok(session
                .last_committed()
                .filter(|(last, _)| *last == checksum)
                .map(|(_, id)| id)),
            DedupMode::NoDuplicates => self.store.find_by_checksum(checksum).map_err(|e| {
                warn!(error = %e, "duplicate lookup failed");
                ClipError::store(e)
            }),
        }
    }

    fn promote(
        &self,
        clip: &mut Clip,
        existing: ClipId,
        checksum: Checksum,
    ) -> Result<CommitOutcome, ClipError> {
        let keys = self
            .engine
            .latest_keys(clip.header.parent_id)
            .map_err(ClipError::store)?;
        let promotion = DuplicatePromotion {
            clip_order: keys.clip_order,
            clip_group_order: keys.clip_group_order,
            last_paste_at_ms: self.clock.now_ms(),
        };

        self.store
            .promote_duplicate(existing, &promotion)
            .map_err(|e| {
                warn!(clip_id = %existing, error = %e, "failed to promote duplicate");
                ClipError::store(e)
            })?;

        clip.header.id = Some(existing);
        clip.header.checksum = checksum;
        clip.header.order.clip_order = promotion.clip_order;
        if let Some(group) = promotion.clip_group_order {
            clip.header.order.clip_group_order = group;
        }
        clip.header.last_paste_at_ms = promotion.last_paste_at_ms;

        info!(
            clip_id = %existing,
            checksum = %checksum,
            clip_order = promotion.clip_order,
            "found duplicate, promoted existing clip"
        );
        Ok(CommitOutcome::Promoted(existing))
    }

    fn insert(
        &self,
        clip: &mut Clip,
        checksum: Checksum,
        session: &mut DedupSession,
    ) -> Result<CommitOutcome, ClipError> {
        let mut header = clip.header.clone();
        header.id = None;
        header.checksum = checksum;
        if header.created_at_ms == 0 {
            header.created_at_ms = self.clock.now_ms();
        }

        let id = self.store.insert_clip(&header, &clip.formats).map_err(|e| {
            warn!(error = %e, "failed to insert clip");
            ClipError::store(e)
        })?;

        header.id = Some(id);
        clip.header = header;
        // the store owns the payloads now
        clip.release_formats();
        session.record(checksum, id);

        info!(clip_id = %id, checksum = %checksum, "inserted new clip");
        self.play_commit_sound();
        Ok(CommitOutcome::Inserted(id))
    }

    fn play_commit_sound(&self) {
        let Some(path) = &self.sound_path else {
            return;
        };
        match self.sound.play(path) {
            Ok(()) => debug!(path = %path.display(), "played commit sound"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to play commit sound"),
        }
    }
}
