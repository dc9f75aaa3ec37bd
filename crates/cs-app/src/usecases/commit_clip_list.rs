use std::sync::Arc;

use cs_core::ports::ClockPort;
use cs_core::ClipList;
use tracing::{info, info_span, warn};

use crate::order_engine::OrderEngine;
use crate::usecases::commit_clip::{CommitClipUseCase, DedupSession};

/// Commit every clip of a list, in list order. Best effort.
///
/// 批量提交：单个失败只计数，不中断。
pub struct CommitClipListUseCase {
    commit: CommitClipUseCase,
    engine: OrderEngine,
    clock: Arc<dyn ClockPort>,
}

impl CommitClipListUseCase {
    pub fn new(commit: CommitClipUseCase, engine: OrderEngine, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            commit,
            engine,
            clock,
        }
    }

    /// Returns the number of clips committed successfully.
    ///
    /// With `apply_latest_order`, each clip gets fresh latest keys right
    /// before its own commit, so the list order becomes the commit order.
    pub fn execute(
        &self,
        clips: &mut ClipList,
        apply_latest_order: bool,
        session: &mut DedupSession,
    ) -> usize {
        let span = info_span!(
            "usecase.commit_clip_list.execute",
            count = clips.len(),
            apply_latest_order
        );
        let _enter = span.enter();

        let mut saved = 0;
        for (index, clip) in clips.iter_mut().enumerate() {
            if apply_latest_order {
                match self.engine.latest_keys(clip.header.parent_id) {
                    Ok(keys) => {
                        clip.header.order.clip_order = keys.clip_order;
                        if let Some(group) = keys.clip_group_order {
                            clip.header.order.clip_group_order = group;
                        }
                    }
                    Err(e) => {
                        warn!(index, error = %e, "failed to compute latest order, skipping clip");
                        continue;
                    }
                }
            }
            clip.header.created_at_ms = self.clock.now_ms();

            match self.commit.execute(clip, session) {
                Ok(_) => saved += 1,
                Err(e) => warn!(index, error = %e, "failed to commit clip"),
            }
        }

        info!(saved, total = clips.len(), "committed clip list");
        saved
    }
}
