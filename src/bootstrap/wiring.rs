//! # Dependency wiring / 依赖装配
//!
//! The only place that knows which adapter backs which port.
//! 唯一知道每个端口由哪个适配器实现的地方。

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use cs_app::{AppDeps, UseCaseFactory};
use cs_core::ports::{ClipboardSourcePort, CommitSoundPort};
use cs_core::ClipConfig;
use cs_infra::db::{init_db_pool, DieselSqliteExecutor};
use cs_infra::{load_config, DieselClipStore, SystemClock};
use cs_platform::{AppDirs, ProcessSoundPlayer, SilentSoundPlayer};
use tracing::{debug, info};

/// Directories, honouring a `--data-dir` override.
pub fn resolve_dirs(data_dir: Option<&Path>) -> Result<AppDirs> {
    match data_dir {
        Some(base) => Ok(AppDirs::with_base(base)),
        None => AppDirs::resolve(),
    }
}

/// Everything a command needs: the configuration and the wired ports.
pub struct Runtime {
    pub config: ClipConfig,
    pub deps: AppDeps,
}

impl Runtime {
    /// Load the configuration and wire the ports around `clipboard`.
    pub fn new(
        dirs: &AppDirs,
        config_path: Option<&Path>,
        clipboard: Arc<dyn ClipboardSourcePort>,
    ) -> Result<Self> {
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| dirs.config_path());
        let config = load_config(&config_path)?;
        let deps = build_deps(&config, dirs, clipboard)?;
        Ok(Self { config, deps })
    }

    pub fn usecases(&self) -> UseCaseFactory<'_> {
        UseCaseFactory::new(&self.deps, &self.config)
    }
}

pub fn build_deps(
    config: &ClipConfig,
    dirs: &AppDirs,
    clipboard: Arc<dyn ClipboardSourcePort>,
) -> Result<AppDeps> {
    let db_path = database_path(config, dirs)?;
    info!(path = %db_path.display(), "opening clip database");

    let pool = init_db_pool(&db_path.to_string_lossy())
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;
    let store = Arc::new(DieselClipStore::new(DieselSqliteExecutor::new(pool)));

    let sound: Arc<dyn CommitSoundPort> = match &config.play_sound_on_commit_path {
        Some(path) => {
            debug!(path = %path.display(), "commit sound enabled");
            Arc::new(ProcessSoundPlayer::new())
        }
        None => Arc::new(SilentSoundPlayer),
    };

    Ok(AppDeps {
        clipboard,
        store,
        clock: Arc::new(SystemClock),
        sound,
    })
}

fn database_path(config: &ClipConfig, dirs: &AppDirs) -> Result<PathBuf> {
    let path = config
        .database_path
        .clone()
        .unwrap_or_else(|| dirs.database_path());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_platform::MemoryClipboard;

    #[test]
    fn runtime_creates_database_under_data_dir() {
        let base = tempfile::tempdir().unwrap();
        let dirs = AppDirs::with_base(base.path());

        let runtime = Runtime::new(&dirs, None, Arc::new(MemoryClipboard::new())).unwrap();

        assert_eq!(runtime.config, ClipConfig::default());
        assert!(dirs.database_path().exists());
    }

    #[test]
    fn configured_database_path_wins() {
        let base = tempfile::tempdir().unwrap();
        let dirs = AppDirs::with_base(base.path());
        let config = ClipConfig {
            database_path: Some(base.path().join("elsewhere").join("clips.db")),
            ..Default::default()
        };

        let path = database_path(&config, &dirs).unwrap();

        assert_eq!(path, base.path().join("elsewhere").join("clips.db"));
        assert!(base.path().join("elsewhere").is_dir());
    }
}
