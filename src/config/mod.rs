use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::column::DEFAULT_ID_FIELD;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Class names and markers used by the HTML output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub overridden_class: String,
    pub change_value_class: String,
    pub change_user_class: String,
    pub change_note_class: String,
    pub delete_class: String,
    pub delete_marker: String,
    pub edit_class: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            overridden_class: "overridden-by-change".to_string(),
            change_value_class: "change-value".to_string(),
            change_user_class: "change-user w3-small".to_string(),
            change_note_class: "change-note w3-small".to_string(),
            delete_class: "delete-change".to_string(),
            delete_marker: "❌".to_string(),
            edit_class: "w3-button w3-round w3-theme fa fa-pencil".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_format: ExportFormat,
    /// Identifying field used when a table descriptor does not name one.
    pub id_field: String,
    /// Offset for zone-less timestamps, e.g. "+01:00". Local zone when unset.
    pub utc_offset: Option<String>,
    pub html: HtmlConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: ExportFormat::Text,
            id_field: DEFAULT_ID_FIELD.to_string(),
            utc_offset: None,
            html: HtmlConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("racetable")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".racetable")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("racetable.conf")
    }

    /// Load configuration from `path` (default location when `None`).
    /// A missing file gives the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating the directory if needed.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.id_field.trim().is_empty() {
            return Err(AppError::Config("id_field must not be empty".into()));
        }
        self.local_offset()?;
        Ok(())
    }

    pub fn local_offset(&self) -> AppResult<Option<FixedOffset>> {
        parse_offset(self.utc_offset.as_deref())
    }
}

/// Parses "+HH:MM" / "-HH:MM"; `None` stays `None`.
pub fn parse_offset(offset: Option<&str>) -> AppResult<Option<FixedOffset>> {
    offset
        .map(|s| {
            s.trim()
                .parse::<FixedOffset>()
                .map_err(|_| AppError::InvalidOffset(s.to_string()))
        })
        .transpose()
}
