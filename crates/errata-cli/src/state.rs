use std::path::PathBuf;
use std::sync::Arc;

use errata_storage::FileStore;

use crate::config::ErrataConfig;

/// What a command needs besides its own arguments.
pub struct AppState {
    pub config: ErrataConfig,
    pub config_path: PathBuf,
    pub store: Arc<FileStore>,
}

impl AppState {
    /// `data_dir` from the command line beats the config file.
    pub fn new(
        config: ErrataConfig,
        config_path: PathBuf,
        data_dir: Option<PathBuf>,
    ) -> eyre::Result<Self> {
        let dir = match data_dir {
            Some(dir) => dir,
            None => config.resolve_data_dir()?,
        };
        tracing::debug!(data_dir = %dir.display(), "using data directory");
        Ok(Self {
            config,
            config_path,
            store: Arc::new(FileStore::new(dir)),
        })
    }
}
