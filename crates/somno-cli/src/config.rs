use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use somno_scoring::StrategyKind;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding step in [`MIGRATIONS`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SomnoConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub default_strategy: StrategyKind,
    /// Added in v1; older configs are migrated to `true`.
    pub include_breakdown: bool,
    #[serde(default)]
    pub output: OutputFormat,
    pub created_at: jiff::Timestamp,
}

impl SomnoConfig {
    pub fn new() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            default_strategy: StrategyKind::default(),
            include_breakdown: true,
            output: OutputFormat::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl Default for SomnoConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("somno").join("config.json"))
}

pub fn load_config(path: &Path) -> eyre::Result<SomnoConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    let raw: serde_json::Value = serde_json::from_str(&contents)?;
    let version = stored_version(&raw)?;
    Ok(serde_json::from_value(migrate(raw, version)?)?)
}

/// Load the config at `path`, falling back to defaults when no file exists.
pub fn load_or_default(path: &Path) -> eyre::Result<SomnoConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(SomnoConfig::new());
    }
    load_config(path)
}

/// The `config_version` recorded in a raw config. Absent means 0.
pub fn stored_version(raw: &serde_json::Value) -> eyre::Result<u32> {
    match raw.get("config_version") {
        None | Some(serde_json::Value::Null) => Ok(0),
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| eyre::eyre!("invalid config_version: {value}")),
    }
}

type Migration = fn(&mut serde_json::Map<String, serde_json::Value>);

/// `MIGRATIONS[n]` upgrades a v`n` object to v`n + 1`.
const MIGRATIONS: [Migration; CURRENT_VERSION as usize] = [add_include_breakdown];

/// v0 builds always printed the breakdown.
fn add_include_breakdown(obj: &mut serde_json::Map<String, serde_json::Value>) {
    obj.entry("include_breakdown")
        .or_insert(serde_json::Value::Bool(true));
}

/// Bring a raw config at `from_version` up to [`CURRENT_VERSION`].
pub fn migrate(mut raw: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports \
             ({CURRENT_VERSION}); upgrade somno to read it"
        ));
    }
    if from_version == CURRENT_VERSION {
        return Ok(raw);
    }

    let obj = raw
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
    for (version, step) in MIGRATIONS.iter().enumerate().skip(from_version as usize) {
        step(obj);
        tracing::info!(from = version, to = version + 1, "config migrated");
    }
    obj.insert("config_version".to_string(), CURRENT_VERSION.into());
    Ok(raw)
}

/// Persist `config` stamped with [`CURRENT_VERSION`], readable only by the owner.
pub fn save_config(path: &Path, config: &SomnoConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    let contents = serde_json::to_string_pretty(&SomnoConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    })?;

    // Readers never observe a half-written file.
    let staging = path.with_extension("json.tmp");
    std::fs::write(&staging, contents)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&staging, std::fs::Permissions::from_mode(0o600))?;
    }
    std::fs::rename(&staging, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
