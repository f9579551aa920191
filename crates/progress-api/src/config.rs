use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use progress_export::styles::DocumentStyles;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "progress-desk";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PROGRESS_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Printed in the header of every report.
    pub organization: String,
    #[serde(default)]
    pub logo_path: Option<PathBuf>,
    pub data_dir: PathBuf,
    /// Added in v1.
    pub export_dir: PathBuf,
    pub bind_addr: String,
    /// IANA zone name used to place records on calendar days. Added in v1.
    pub timezone: String,
    #[serde(default)]
    pub styles: DocumentStyles,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .map(|d| d.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("data"));
        Self {
            config_version: CURRENT_VERSION,
            organization: "Progress Desk".to_string(),
            logo_path: None,
            export_dir: data_dir.join("exports"),
            data_dir,
            bind_addr: "127.0.0.1:8080".to_string(),
            timezone: "UTC".to_string(),
            styles: DocumentStyles::default(),
        }
    }
}

impl ServiceConfig {
    pub fn time_zone(&self) -> eyre::Result<TimeZone> {
        TimeZone::get(&self.timezone)
            .map_err(|e| eyre::eyre!("unknown time zone {:?}: {e}", self.timezone))
    }
}

/// `$PROGRESS_CONFIG`, or `config.json` in the platform config directory.
pub fn config_path() -> eyre::Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR).join("config.json"))
}

pub fn load_config() -> eyre::Result<ServiceConfig> {
    load_config_from(&config_path()?)
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> eyre::Result<ServiceConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(ServiceConfig::default());
        }
        Err(e) => {
            return Err(eyre::eyre!(
                "failed to read config at {}: {e}",
                path.display()
            ));
        }
    };
    let (config, on_disk_version) = parse_versioned(&contents)?;

    // Persist migrations so the file on disk matches what we run with.
    if on_disk_version < CURRENT_VERSION {
        save_config_to(path, &config)?;
    }
    Ok(config)
}

/// Parse config JSON, migrating older versions first.
pub fn parse_config(contents: &str) -> eyre::Result<ServiceConfig> {
    parse_versioned(contents).map(|(config, _)| config)
}

fn parse_versioned(contents: &str) -> eyre::Result<(ServiceConfig, u32)> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = match json.get("config_version") {
        None | Some(serde_json::Value::Null) => 0,
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| eyre::eyre!("config_version {v} is not a valid version"))?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: ServiceConfig = serde_json::from_value(migrated)?;
    Ok((config, on_disk_version))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: exports get their own directory; days are computed in UTC
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let data_dir = obj
            .get("data_dir")
            .and_then(|v| v.as_str())
            .map(PathBuf::from)
            .ok_or_else(|| eyre::eyre!("config has no data_dir"))?;
        obj.entry("export_dir").or_insert(serde_json::Value::String(
            data_dir.join("exports").display().to_string(),
        ));
        obj.entry("timezone")
            .or_insert(serde_json::Value::String("UTC".to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added export_dir, timezone)");
    }

    Ok(json)
}

/// Write `config` to `path` atomically, stamped with the current version.
pub fn save_config_to(path: &Path, config: &ServiceConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
