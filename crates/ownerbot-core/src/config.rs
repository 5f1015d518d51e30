use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OwnerbotError;

/// Top-level configuration loaded from `.ownerbot.toml`.
///
/// Every field has a default matching the stock GitHub Actions setup, so the
/// config file is optional. CLI flags override config values.
///
/// # Examples
///
/// ```
/// use ownerbot_core::OwnerbotConfig;
///
/// let config = OwnerbotConfig::default();
/// assert_eq!(config.notify.module_root, "modules");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwnerbotConfig {
    /// Notification behavior settings.
    #[serde(default)]
    pub notify: NotifyConfig,
}

impl OwnerbotConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerbotError::Io`] if the file cannot be read, or
    /// [`OwnerbotError::Toml`] if the content is not valid TOML.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ownerbot_core::OwnerbotConfig;
    /// use std::path::Path;
    ///
    /// let config = OwnerbotConfig::from_file(Path::new(".ownerbot.toml")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, OwnerbotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerbotError::Toml`] if parsing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use ownerbot_core::OwnerbotConfig;
    ///
    /// let toml = r#"
    /// [notify]
    /// module_root = "packages"
    /// "#;
    /// let config = OwnerbotConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.notify.module_root, "packages");
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, OwnerbotError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

/// Owner-notification settings.
///
/// # Examples
///
/// ```
/// use ownerbot_core::NotifyConfig;
///
/// let config = NotifyConfig::default();
/// assert_eq!(config.bot_login, "github-actions[bot]");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Top-level directory whose children are treated as modules.
    #[serde(default = "default_module_root")]
    pub module_root: String,
    /// Path to the owners mapping, relative to the workspace root.
    #[serde(default = "default_owners_file")]
    pub owners_file: String,
    /// Marker line identifying the bot's comment on subsequent runs.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Login of the identity the bot comments as.
    #[serde(default = "default_bot_login")]
    pub bot_login: String,
}

fn default_module_root() -> String {
    "modules".into()
}

fn default_owners_file() -> String {
    ".github/owners.json".into()
}

fn default_marker() -> String {
    "<!-- owners-notification-bot -->".into()
}

fn default_bot_login() -> String {
    "github-actions[bot]".into()
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            module_root: default_module_root(),
            owners_file: default_owners_file(),
            marker: default_marker(),
            bot_login: default_bot_login(),
        }
    }
}
