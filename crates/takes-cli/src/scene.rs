use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use takes_core::host::MemoryHost;
use takes_core::{TakeConfig, TakeSession};

/// A scene file opened for one command.
pub struct Scene {
    path: PathBuf,
    host: Rc<MemoryHost>,
    session: TakeSession,
}

impl Scene {
    pub fn open(path: &Path, config: Option<&Path>) -> Result<Self> {
        let host = MemoryHost::load(path)
            .with_context(|| format!("Failed to read scene '{}'", path.display()))?;

        let config = match config {
            Some(config_path) => TakeConfig::load(config_path).with_context(|| {
                format!("Failed to read config '{}'", config_path.display())
            })?,
            None => TakeConfig::default(),
        };

        let root = host.state().root;
        if root != config.root_take {
            anyhow::bail!(
                "Scene root take is '{root}' but the config expects '{}'",
                config.root_take
            );
        }

        let host = Rc::new(host);
        let session = TakeSession::with_config(host.clone(), config);
        tracing::debug!(scene = %path.display(), "Opened scene");
        Ok(Self {
            path: path.to_path_buf(),
            host,
            session,
        })
    }

    pub fn session(&self) -> &TakeSession {
        &self.session
    }

    pub fn save(&self) -> Result<()> {
        self.host
            .save(&self.path)
            .with_context(|| format!("Failed to write scene '{}'", self.path.display()))?;
        tracing::debug!(scene = %self.path.display(), "Saved scene");
        Ok(())
    }
}
