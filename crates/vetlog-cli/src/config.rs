use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vetlog_core::models::profile::ProfileType;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VetlogConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Directory holding the on-device key-value store.
    pub data_dir: PathBuf,
    /// Profile analyzed when `--profile` is not given.
    #[serde(default)]
    pub default_profile: Option<String>,
    /// Added in v1; older configs migrate to `veteran`.
    #[serde(default)]
    pub profile_type: ProfileType,
    pub created_at: jiff::Timestamp,
}

impl VetlogConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir,
            default_profile: None,
            profile_type: ProfileType::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

/// Platform config directory for vetlog.
pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("vetlog"))
}

/// Platform data directory used when no config exists yet.
pub fn default_data_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("vetlog"))
}

pub fn has_config(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).exists()
}

pub fn load_config(dir: &Path) -> eyre::Result<VetlogConfig> {
    let path = dir.join(CONFIG_FILE);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: VetlogConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Load the config in `dir`, or create and save a fresh one pointing at
/// `data_dir`.
pub fn load_or_init(dir: &Path, data_dir: impl FnOnce() -> eyre::Result<PathBuf>) -> eyre::Result<VetlogConfig> {
    if has_config(dir) {
        return load_config(dir);
    }
    let config = VetlogConfig::new(data_dir()?);
    save_config(dir, &config)?;
    tracing::info!(data_dir = %config.data_dir.display(), "created default config");
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update vetlog."
        ));
    }

    // v0 → v1: add profile_type
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("profile_type")
            .or_insert(serde_json::Value::String("veteran".to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added profile_type)");
    }

    Ok(json)
}

pub fn save_config(dir: &Path, config: &VetlogConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
