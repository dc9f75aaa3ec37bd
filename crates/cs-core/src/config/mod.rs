//! # Configuration DTO / 配置数据
//!
//! Plain data read from `clipstack.toml`. Every field has a default, so a
//! partial (or missing) file yields a usable configuration.
//! 所有字段都有默认值，缺失的配置文件等价于默认配置。

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clip::FormatId;

/// Application configuration
/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipConfig {
    /// Largest payload accepted for a single format, 0 = unlimited.
    pub max_clip_size_bytes: u64,

    /// Stored descriptions are truncated to this many characters.
    pub description_max_length: usize,

    /// `true`: only the last committed clip counts as a duplicate.
    /// `false`: any stored clip with the same checksum does.
    pub allow_duplicates: bool,

    /// Format whose presence on the clipboard blocks capture.
    pub ignore_format_id: FormatId,

    /// Format whose presence delays capture by `delay_ms`.
    pub delay_format_id: FormatId,

    pub delay_ms: u64,

    /// Sound played after a new clip was stored.
    pub play_sound_on_commit_path: Option<PathBuf>,

    /// Database file; the application data directory is used when unset.
    pub database_path: Option<PathBuf>,

    /// Formats captured, in priority order.
    /// 捕获的格式（按优先级排列）。
    pub capture_formats: Vec<FormatId>,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            max_clip_size_bytes: 0,
            description_max_length: 500,
            allow_duplicates: false,
            ignore_format_id: FormatId::new("ClipStack Ignore Clipboard"),
            delay_format_id: FormatId::new("ClipStack Delay Saving Data"),
            delay_ms: 1500,
            play_sound_on_commit_path: None,
            database_path: None,
            capture_formats: vec![
                FormatId::unicode_text(),
                FormatId::text(),
                FormatId::new("Rich Text Format"),
                FormatId::new("HTML Format"),
                FormatId::file_drop(),
            ],
        }
    }
}

impl ClipConfig {
    pub fn capture_options(&self) -> CaptureOptions {
        CaptureOptions {
            max_clip_size_bytes: self.max_clip_size_bytes,
            description_max_length: self.description_max_length,
            ignore_format_id: self.ignore_format_id.clone(),
            delay_format_id: self.delay_format_id.clone(),
            delay: Duration::from_millis(self.delay_ms),
        }
    }

    pub fn dedup_mode(&self) -> DedupMode {
        if self.allow_duplicates {
            DedupMode::AllowDuplicates
        } else {
            DedupMode::NoDuplicates
        }
    }
}

/// Settings consumed by the capture pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOptions {
    pub max_clip_size_bytes: u64,
    pub description_max_length: usize,
    pub ignore_format_id: FormatId,
    pub delay_format_id: FormatId,
    pub delay: Duration,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        ClipConfig::default().capture_options()
    }
}

impl CaptureOptions {
    /// Whether a payload of `size` bytes exceeds the ceiling.
    pub fn exceeds_max_size(&self, size: usize) -> bool {
        self.max_clip_size_bytes > 0 && size as u64 > self.max_clip_size_bytes
    }
}

/// How duplicates are detected on commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DedupMode {
    /// Compare only against the clip committed last in this session.
    AllowDuplicates,
    /// Compare against every stored clip.
    NoDuplicates,
}
