use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use errata_core::debounce::SUGGESTION_DELAY;

/// Current config version. Bump this when adding fields or changing shape.
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrataConfig {
    /// Schema version. A missing field reads as the current version.
    #[serde(default = "current_version")]
    pub config_version: u32,
    /// Where the checklist, history and last input are kept. `None` means
    /// the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Quiet period before `watch` prints a tip.
    #[serde(default = "default_suggestion_delay_ms")]
    pub suggestion_delay_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<jiff::Timestamp>,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

fn default_suggestion_delay_ms() -> u64 {
    SUGGESTION_DELAY.as_millis() as u64
}

impl Default for ErrataConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir: None,
            suggestion_delay_ms: default_suggestion_delay_ms(),
            created_at: None,
        }
    }
}

impl ErrataConfig {
    pub fn suggestion_delay(&self) -> Duration {
        Duration::from_millis(self.suggestion_delay_ms)
    }

    /// The data directory to use, falling back to the platform default.
    pub fn resolve_data_dir(&self) -> eyre::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("errata"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn default_data_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("errata"))
}

/// Read the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> eyre::Result<ErrataConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ErrataConfig::default());
        }
        Err(e) => {
            return Err(eyre::eyre!(
                "failed to read config at {}: {e}",
                path.display()
            ));
        }
    };

    // Parse as raw JSON so the version can be checked before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    if let Some(raw) = json.get("config_version") {
        let on_disk_version = raw
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| eyre::eyre!("config_version {raw} is not a valid version"))?;
        if on_disk_version > CURRENT_VERSION {
            return Err(eyre::eyre!(
                "config_version {on_disk_version} is newer than this build supports ({CURRENT_VERSION}). \
                 Please update errata."
            ));
        }
    }

    let config: ErrataConfig = serde_json::from_value(json)?;
    Ok(config)
}

pub fn save_config(path: &Path, config: &ErrataConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
