//! # Configuration Loader / 配置加载器
//!
//! Reads `clipstack.toml` into [`ClipConfig`]. A missing file is not an
//! error: the defaults apply. Malformed files are reported with context.
//! 配置文件不存在时使用默认值；格式错误时返回带上下文的错误。

use std::path::Path;

use anyhow::Context;
use cs_core::ClipConfig;
use tracing::info;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
pub fn load_config(config_path: &Path) -> anyhow::Result<ClipConfig> {
    if !config_path.exists() {
        info!(path = %config_path.display(), "config file not found, using defaults");
        return Ok(ClipConfig::default());
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: ClipConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    Ok(config)
}
