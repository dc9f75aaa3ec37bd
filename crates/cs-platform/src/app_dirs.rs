use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const APP_DIR_NAME: &str = "clipstack";

/// Setting `CLIPSTACK_PROFILE=work` isolates data under `clipstack-work`.
pub const PROFILE_ENV: &str = "CLIPSTACK_PROFILE";

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Where ClipStack keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub data_root: PathBuf,
    pub config_root: PathBuf,
}

impl AppDirs {
    /// Resolve against the system data-local and config directories.
    pub fn resolve() -> Result<Self> {
        let data = dirs::data_local_dir().context("data-local directory unavailable")?;
        let config = dirs::config_dir().context("config directory unavailable")?;
        let name = resolved_app_dir_name();

        Ok(Self {
            data_root: data.join(&name),
            config_root: config.join(&name),
        })
    }

    /// Resolve every directory under `base`.
    pub fn with_base(base: &Path) -> Self {
        let root = base.join(resolved_app_dir_name());
        Self {
            data_root: root.clone(),
            config_root: root,
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_root.join("clipstack.db")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_root.join("logs")
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_root.join("clipstack.toml")
    }
}
