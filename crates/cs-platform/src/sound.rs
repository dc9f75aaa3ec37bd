//! Commit sound adapters.

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use cs_core::ports::CommitSoundPort;
use tracing::debug;

/// Plays a sound file with the platform's command-line player.
///
/// The player is spawned and not waited for, so a long sound never delays
/// the commit.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSoundPlayer;

impl ProcessSoundPlayer {
    pub fn new() -> Self {
        Self
    }

    fn command(path: &Path) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("afplay");
            cmd.arg(path);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("powershell");
            cmd.arg("-NoProfile").arg("-Command").arg(format!(
                "(New-Object Media.SoundPlayer '{}').PlaySync()",
                path.display()
            ));
            cmd
        } else {
            let mut cmd = Command::new("paplay");
            cmd.arg(path);
            cmd
        }
    }
}

impl CommitSoundPort for ProcessSoundPlayer {
    fn play(&self, path: &Path) -> Result<()> {
        if !path.is_file() {
            bail!("sound file {} does not exist", path.display());
        }

        let mut cmd = Self::command(path);
        let child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to start sound player for {}", path.display()))?;

        debug!(pid = child.id(), path = %path.display(), "started sound player");
        Ok(())
    }
}

/// Never plays anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSoundPlayer;

impl CommitSoundPort for SilentSoundPlayer {
    fn play(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_sound_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = ProcessSoundPlayer::new()
            .play(&dir.path().join("nope.wav"))
            .unwrap_err();

        assert!(err.to_string().contains("does not exist"));
    }
}
