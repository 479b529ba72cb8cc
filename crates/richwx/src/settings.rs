//! The user-agent settings file.
//!
//! The NWS asks API clients to identify themselves with contact details.
//! They are kept in a small TOML file:
//!
//! ```toml
//! [UserAgent]
//! applicationname = "RichWxTerminal"
//! contactinfo = "NoneSet"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_NAME: &str = "RichWxTerminal";

/// Contact value meaning "not set".
pub const UNSET_CONTACT: &str = "NoneSet";

const FILE_NAME: &str = "useragent.toml";

/// Errors that can occur while loading or saving the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// No home or config directory could be determined.
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    /// Reading or writing the settings file failed.
    #[error("failed to access settings at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file isn't valid TOML or lacks the `[UserAgent]` table.
    #[error("failed to deserialize settings: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// What richwx sends as its `User-Agent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAgent {
    #[serde(rename = "applicationname")]
    pub app_name: String,
    #[serde(rename = "contactinfo")]
    pub contact: String,
}

impl Default for UserAgent {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            contact: UNSET_CONTACT.to_string(),
        }
    }
}

impl UserAgent {
    /// False while the contact is still the placeholder.
    pub fn contact_is_set(&self) -> bool {
        self.contact != UNSET_CONTACT
    }

    /// The header value, `(app name, contact)`.
    pub fn header_value(&self) -> String {
        format!("({}, {})", self.app_name, self.contact)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(rename = "UserAgent")]
    user_agent: UserAgent,
}

/// Reads and writes the settings file at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// A store backed by the file at `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/richwx/useragent.toml`.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        ProjectDirs::from("", "", "richwx")
            .map(|dirs| dirs.config_dir().join(FILE_NAME))
            .ok_or(SettingsError::DirectoriesNotFound)
    }

    /// The settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the settings, writing defaults first if the file doesn't exist.
    pub fn load(&self) -> Result<UserAgent, SettingsError> {
        log::debug!("Loading settings from {:?}", self.path);
        if !self.path.exists() {
            log::info!("No settings at {:?}, writing defaults", self.path);
            let defaults = UserAgent::default();
            self.save(&defaults)?;
            return Ok(defaults);
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        let file: SettingsFile = toml::from_str(&contents)?;
        Ok(file.user_agent)
    }

    /// Writes the settings, creating parent directories as needed.
    pub fn save(&self, user_agent: &UserAgent) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let contents = toml::to_string_pretty(&SettingsFile {
            user_agent: user_agent.clone(),
        })?;
        fs::write(&self.path, contents).map_err(|source| self.io_error(source))?;
        log::info!("Saved settings to {:?}", self.path);
        Ok(())
    }

    /// Resets the file to defaults, then stores `contact`.
    pub fn set_contact(&self, contact: &str) -> Result<UserAgent, SettingsError> {
        let user_agent = UserAgent {
            contact: contact.to_string(),
            ..UserAgent::default()
        };
        self.save(&user_agent)?;
        Ok(user_agent)
    }

    /// Forgets the contact information.
    pub fn purge(&self) -> Result<UserAgent, SettingsError> {
        let defaults = UserAgent::default();
        self.save(&defaults)?;
        Ok(defaults)
    }

    fn io_error(&self, source: std::io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
