//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for the use case factory.
//! 用例工厂的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! **这不是 Builder 模式。**
//! - No defaults / 无默认值
//! - No hidden logic / 无隐藏逻辑

use std::sync::Arc;

use cs_core::ports::{ClipStorePort, ClipboardSourcePort, ClockPort, CommitSoundPort};

/// Application dependency grouping
/// 应用依赖分组
///
/// All dependencies are required.
/// 所有依赖都是必需的。
pub struct AppDeps {
    // Clipboard / 剪贴板
    pub clipboard: Arc<dyn ClipboardSourcePort>,

    // Storage / 存储
    pub store: Arc<dyn ClipStorePort>,

    // System / 系统
    pub clock: Arc<dyn ClockPort>,
    pub sound: Arc<dyn CommitSoundPort>,
}
