use crate::error::CmError;
use crate::result::CmResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_USER_AGENT: &str = "reddit-cm:v0.1.0";

/// Credential fields as they may appear in a config file.
///
/// Unknown keys are ignored so a config shared with other tools still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Yaml,
    Toml,
    Unknown,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Self::Json,
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Unknown,
        }
    }
}

impl ConfigFile {
    pub fn default_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/reddit-cm/config.yaml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("reddit-cm/config.yaml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("reddit-cm\\config.yaml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load(path: &Path) -> CmResult<Self> {
        if !path.exists() {
            return Err(CmError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CmError::Config(format!("Failed to parse config file: {}", e)))?;

        let config = Self::parse(&content, ConfigFormat::from_path(path))
            .map_err(|e| CmError::Config(format!("Failed to parse config file: {}", e)))?;

        tracing::debug!("Loaded config file {}", path.display());
        Ok(config)
    }

    fn parse(content: &str, format: ConfigFormat) -> Result<Self, String> {
        match format {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => Self::parse_yaml(content),
            ConfigFormat::Unknown => {
                serde_json::from_str(content).or_else(|_| Self::parse_yaml(content))
            }
        }
    }

    fn parse_yaml(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str::<Option<Self>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|e| e.to_string())
    }
}

/// Values supplied explicitly on the command line or through the
/// environment. These win over anything in a config file.
#[derive(Debug, Clone, Default)]
pub struct CredentialOverrides {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    pub user_agent: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Merges explicit credentials with an optional config file.
#[derive(Debug, Default)]
pub struct CredentialResolver {
    config_path: Option<PathBuf>,
    fallback_to_default_path: bool,
}

impl CredentialResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_file(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        self.config_path = path.map(Into::into);
        self
    }

    /// Also consult [`ConfigFile::default_path`] when no explicit config
    /// file was given. A missing default file is not an error.
    pub fn with_default_config(mut self, enabled: bool) -> Self {
        self.fallback_to_default_path = enabled;
        self
    }

    fn load_config(&self) -> CmResult<ConfigFile> {
        if let Some(path) = &self.config_path {
            return ConfigFile::load(path);
        }
        if self.fallback_to_default_path {
            if let Some(path) = ConfigFile::default_path().filter(|p| p.exists()) {
                return ConfigFile::load(&path);
            }
        }
        Ok(ConfigFile::default())
    }

    pub fn resolve(&self, overrides: CredentialOverrides) -> CmResult<Credentials> {
        let config = self.load_config()?;
        Self::merge(overrides, config)
    }

    pub fn merge(overrides: CredentialOverrides, config: ConfigFile) -> CmResult<Credentials> {
        let client_id = pick(overrides.client_id, config.client_id);
        let client_secret = pick(overrides.client_secret, config.client_secret);
        let username = pick(overrides.username, config.username);
        let password = pick(overrides.password, config.password);
        let user_agent = pick(overrides.user_agent, config.user_agent)
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let mut missing = Vec::new();
        for (field, value) in [
            ("client-id", &client_id),
            ("client-secret", &client_secret),
            ("username", &username),
            ("password", &password),
        ] {
            if value.is_none() {
                missing.push(field.to_string());
            }
        }

        match (client_id, client_secret, username, password) {
            (Some(client_id), Some(client_secret), Some(username), Some(password)) => {
                Ok(Credentials {
                    client_id,
                    client_secret,
                    username,
                    password,
                    user_agent,
                })
            }
            _ => Err(CmError::MissingCredentials { fields: missing }),
        }
    }
}

fn pick(explicit: Option<String>, from_file: Option<String>) -> Option<String> {
    explicit
        .filter(|v| !v.is_empty())
        .or_else(|| from_file.filter(|v| !v.is_empty()))
}
