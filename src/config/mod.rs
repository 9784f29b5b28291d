use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Relocates the configuration directory (handy for tests and portable installs).
pub const CONFIG_DIR_ENV: &str = "GEARMINDER_CONFIG_DIR";
pub const EMAIL_FROM_ENV: &str = "GEARMINDER_EMAIL_FROM";
pub const EMAIL_TO_ENV: &str = "GEARMINDER_EMAIL_TO";
pub const SMTP_USERNAME_ENV: &str = "GEARMINDER_SMTP_USERNAME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the CSV store file.
    #[serde(default = "default_store")]
    pub store: String,
    /// Seed a freshly created store with the sample gear list.
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_true")]
    pub smtp_tls: bool,
    #[serde(default = "default_smtp_timeout")]
    pub smtp_timeout_secs: u64,
    /// Sender address, e.g. "reminders@example.com"
    #[serde(default)]
    pub email_from: Option<String>,
    /// Recipient address, e.g. "maintainer@example.com"
    #[serde(default)]
    pub email_to: Option<String>,
    /// Login for the SMTP server; defaults to `email_from`.
    #[serde(default)]
    pub smtp_username: Option<String>,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}
fn default_true() -> bool {
    true
}
fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}
fn default_smtp_port() -> u16 {
    465
}
fn default_smtp_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            seed_sample_data: default_true(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_tls: default_true(),
            smtp_timeout_secs: default_smtp_timeout(),
            email_from: None,
            email_to: None,
            smtp_username: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV)
            && !dir.trim().is_empty()
        {
            return expand_tilde(&dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("gearminder")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".gearminder")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gearminder.conf")
    }

    /// Return the default path of the store file
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("gears.csv")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Environment variables override the mail settings in both cases.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::read_file()?.unwrap_or_default();
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    /// Parse the config file as written on disk, without environment overrides.
    fn read_file() -> AppResult<Option<Self>> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(serde_yaml::from_str(&content)?))
    }

    fn apply_env_overrides(&mut self) {
        let read = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());

        if let Some(from) = read(EMAIL_FROM_ENV) {
            self.email_from = Some(from);
        }
        if let Some(to) = read(EMAIL_TO_ENV) {
            self.email_to = Some(to);
        }
        if let Some(user) = read(SMTP_USERNAME_ENV) {
            self.smtp_username = Some(user);
        }
    }

    /// Resolved path of the store file (`~` expanded).
    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    /// Initialize the configuration directory and file.
    ///
    /// `custom_store` may be absolute or relative to the config directory.
    /// In test mode the config file is not written.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Self::read_file()?.unwrap_or_default();

        if let Some(name) = custom_store {
            let p = expand_tilde(&name);
            let resolved = if p.is_absolute() { p } else { dir.join(p) };
            config.store = resolved.to_string_lossy().to_string();
        }

        if !is_test {
            config.write_to(&Self::config_file())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }

    /// Serialize to YAML. Environment-only secrets are never part of the struct.
    pub fn write_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(AppError::from)
    }
}
