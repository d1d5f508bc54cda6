use crate::errors::{AppError, AppResult};
use crate::models::{Catalog, IdTemplate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check;

/// What the submission does when the photo upload fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadFailurePolicy {
    /// Save the entry without a photo link.
    Continue,
    /// Fail the submission and keep the pending photo and location.
    Abort,
}

/// What the submission does when the remote append fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteFailurePolicy {
    /// Keep the entry in the session list and clear pending fields anyway.
    KeepLocal,
    /// Leave the session untouched so the user can resubmit.
    Discard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailurePolicy {
    #[serde(default = "default_upload_policy")]
    pub upload: UploadFailurePolicy,
    #[serde(default = "default_remote_policy")]
    pub remote: RemoteFailurePolicy,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self {
            upload: default_upload_policy(),
            remote: default_remote_policy(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_site_code")]
    pub site_code: String,
    #[serde(default = "default_year_code")]
    pub year_code: String,
    #[serde(default = "default_folder_id")]
    pub drive_folder_id: String,
    #[serde(default = "default_link_template")]
    pub link_template: String,
    #[serde(default = "default_staging_dir")]
    pub staging_dir: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default)]
    pub location_command: Option<String>,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    #[serde(default)]
    pub catalog: Catalog,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_sheet_name() -> String {
    "TreeQRDatabase".to_string()
}
fn default_site_code() -> String {
    "GGN".to_string()
}
fn default_year_code() -> String {
    "25".to_string()
}
fn default_folder_id() -> String {
    "1iddkNU3O1U6bsoHge1m5a-DDZA_NjSVz".to_string()
}
fn default_link_template() -> String {
    "https://drive.google.com/uc?id={id}".to_string()
}
fn default_staging_dir() -> String {
    Config::config_dir()
        .join("tree_images")
        .to_string_lossy()
        .to_string()
}
fn default_export_dir() -> String {
    Config::config_dir()
        .join("exports")
        .to_string_lossy()
        .to_string()
}
fn default_upload_policy() -> UploadFailurePolicy {
    UploadFailurePolicy::Continue
}
fn default_remote_policy() -> RemoteFailurePolicy {
    RemoteFailurePolicy::KeepLocal
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            sheet_name: default_sheet_name(),
            site_code: default_site_code(),
            year_code: default_year_code(),
            drive_folder_id: default_folder_id(),
            link_template: default_link_template(),
            staging_dir: default_staging_dir(),
            export_dir: default_export_dir(),
            location_command: None,
            failure_policy: FailurePolicy::default(),
            catalog: Catalog::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("treeqr")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".treeqr")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("treeqr.conf")
    }

    /// Return the default path of the shared store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("treeqr.sqlite")
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(format!("invalid YAML: {e}")))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn id_template(&self) -> IdTemplate {
        IdTemplate::new(&self.site_code, &self.year_code)
    }

    /// Write the configuration file (unless `is_test`) and return the store path.
    /// A custom store path is recorded as an absolute path.
    pub fn init_all(
        config_path: &Path,
        custom_db: Option<&Path>,
        is_test: bool,
    ) -> AppResult<PathBuf> {
        let mut config = Self::load_from(config_path)?;

        if let Some(p) = custom_db {
            config.database = std::path::absolute(p)?.to_string_lossy().to_string();
        }

        if !is_test {
            if let Some(dir) = config_path.parent()
                && !dir.as_os_str().is_empty()
            {
                fs::create_dir_all(dir)?;
            }
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(config_path)?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", config_path);
        }

        Ok(PathBuf::from(config.database))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let cfg = Config::from_yaml("site_code: KRB\nfailure_policy:\n  remote: discard\n").unwrap();
        assert_eq!(cfg.site_code, "KRB");
        assert_eq!(cfg.year_code, "25");
        assert_eq!(cfg.failure_policy.remote, RemoteFailurePolicy::Discard);
        assert_eq!(cfg.failure_policy.upload, UploadFailurePolicy::Continue);
        assert!(cfg.catalog.species.iter().any(|s| s == "Unknown sp"));
    }

    #[test]
    fn empty_file_is_default() {
        let cfg = Config::from_yaml("").unwrap();
        assert_eq!(cfg.sheet_name, "TreeQRDatabase");
    }

    #[test]
    fn broken_yaml_is_a_config_error() {
        assert!(matches!(
            Config::from_yaml("site_code: [unterminated"),
            Err(AppError::Config(_))
        ));
    }
}
