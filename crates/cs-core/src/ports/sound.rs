use std::path::Path;

/// Plays the configured sound after a new clip was stored.
pub trait CommitSoundPort: Send + Sync {
    fn play(&self, path: &Path) -> anyhow::Result<()>;
}
