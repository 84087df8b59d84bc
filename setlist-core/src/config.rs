use crate::error::{Result, SetlistError};
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Where view mode and collapsed sections are kept between runs
    #[serde(default = "default_preferences_file")]
    pub preferences_file: Utf8PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactConfig {
    /// Contact page that receives the `setlist` query parameter
    #[serde(default = "default_page_url")]
    pub page_url: String,
    #[serde(default = "default_recipients")]
    pub recipients: Vec<String>,
    #[serde(default = "default_subject")]
    pub subject: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            preferences_file: default_preferences_file(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            page_url: default_page_url(),
            recipients: default_recipients(),
            subject: default_subject(),
        }
    }
}

// Default value functions
fn default_preferences_file() -> Utf8PathBuf {
    dirs::config_dir()
        .map(|p| p.join("setlist/preferences"))
        .and_then(|p| Utf8PathBuf::try_from(p).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("~/.config/setlist/preferences"))
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_page_url() -> String {
    "/contact".to_owned()
}

fn default_recipients() -> Vec<String> {
    vec!["bookings@example.com".to_owned()]
}

fn default_subject() -> String {
    "New Contact Form Submission".to_owned()
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;
        debug!("Loading config from {}", config_path.display());
        Self::load_from_path(&config_path)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SetlistError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)
            .map_err(|e| SetlistError::Config(format!("Failed to parse config: {}", e)))?;

        config.expand_paths();
        config.validate()?;
        Ok(config)
    }

    /// Falls back to defaults when no config file exists or it cannot be used.
    pub fn load_or_default() -> Self {
        match Self::find_config_file() {
            Ok(path) => Self::load_from_path(&path).unwrap_or_else(|e| {
                warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        }
    }

    fn find_config_file() -> Result<PathBuf> {
        let candidates = [
            dirs::config_dir().map(|p| p.join("setlist/setlist.toml")),
            Some(PathBuf::from("/etc/setlist/setlist.toml")),
        ];

        for candidate in candidates.into_iter().flatten() {
            if candidate.exists() {
                return Ok(candidate);
            }
        }

        Err(SetlistError::Config("Config file not found".to_owned()))
    }

    fn expand_paths(&mut self) {
        fn expand_tilde(path: &Utf8PathBuf) -> Utf8PathBuf {
            let path_str = path.as_str();
            if path_str.starts_with("~/") {
                if let Some(home) = dirs::home_dir() {
                    if let Some(home_str) = home.to_str() {
                        return Utf8PathBuf::from(path_str.replacen("~", home_str, 1));
                    }
                }
            }
            path.clone()
        }

        self.general.preferences_file = expand_tilde(&self.general.preferences_file);
    }

    fn validate(&self) -> Result<()> {
        if self.contact.page_url.trim().is_empty() {
            return Err(SetlistError::Config("contact.page_url must not be empty".to_owned()));
        }
        if self.contact.recipients.iter().all(|r| r.trim().is_empty()) {
            return Err(SetlistError::Config(
                "contact.recipients needs at least one address".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}
