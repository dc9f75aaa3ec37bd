//! # Use case factory / 用例工厂
//!
//! Each method returns a use case wired from [`AppDeps`] and [`ClipConfig`].
//! 每个方法返回一个已从 AppDeps 和配置连接好的用例。
//!
//! - Callers never see which ports a use case needs
//! - Use cases stay independent of `AppDeps`

use cs_core::ClipConfig;

use crate::deps::AppDeps;
use crate::order_engine::OrderEngine;
use crate::usecases::{
    CaptureClipUseCase, CommitClipListUseCase, CommitClipUseCase, ExportClipTextUseCase,
    ListClipsUseCase, LoadClipUseCase, RenormalizeOrderUseCase, ReorderClipUseCase,
    SaveEditedClipUseCase, UpdateClipPropertiesUseCase,
};

pub struct UseCaseFactory<'a> {
    deps: &'a AppDeps,
    config: &'a ClipConfig,
}

impl<'a> UseCaseFactory<'a> {
    pub fn new(deps: &'a AppDeps, config: &'a ClipConfig) -> Self {
        Self { deps, config }
    }

    pub fn capture_clip(&self) -> CaptureClipUseCase {
        CaptureClipUseCase::new(
            self.deps.clipboard.clone(),
            self.deps.clock.clone(),
            self.config.capture_options(),
        )
    }

    /// Commit with the configured dedup mode and commit sound.
    /// 使用配置的去重模式和提示音提交。
    pub fn commit_clip(&self) -> CommitClipUseCase {
        CommitClipUseCase::new(
            self.deps.store.clone(),
            self.deps.clock.clone(),
            self.deps.sound.clone(),
            self.config.dedup_mode(),
            self.config.play_sound_on_commit_path.clone(),
        )
    }

    pub fn commit_clip_list(&self) -> CommitClipListUseCase {
        CommitClipListUseCase::new(
            self.commit_clip(),
            OrderEngine::new(self.deps.store.clone()),
            self.deps.clock.clone(),
        )
    }

    pub fn reorder_clip(&self) -> ReorderClipUseCase {
        ReorderClipUseCase::new(self.deps.store.clone())
    }

    pub fn renormalize_order(&self) -> RenormalizeOrderUseCase {
        RenormalizeOrderUseCase::new(self.deps.store.clone())
    }

    pub fn list_clips(&self) -> ListClipsUseCase {
        ListClipsUseCase::new(self.deps.store.clone())
    }

    pub fn load_clip(&self) -> LoadClipUseCase {
        LoadClipUseCase::new(self.deps.store.clone())
    }

    pub fn export_clip_text(&self) -> ExportClipTextUseCase {
        ExportClipTextUseCase::new(self.deps.store.clone())
    }

    pub fn save_edited_clip(&self) -> SaveEditedClipUseCase {
        SaveEditedClipUseCase::new(self.deps.store.clone(), self.config.description_max_length)
    }

    pub fn update_clip_properties(&self) -> UpdateClipPropertiesUseCase {
        UpdateClipPropertiesUseCase::new(
            self.deps.store.clone(),
            self.config.description_max_length,
        )
    }
}
