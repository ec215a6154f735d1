use crate::error::{Error, Result};
use crate::languages::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const ADAMX_DIR: &str = ".adamx";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub indent: u32,
    pub max_line_length: u32,
    pub preferred_language: Language,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            indent: 4,
            max_line_length: 88,
            preferred_language: Language::Python,
        }
    }
}

/// The whole persisted settings document. Mutating operations go through
/// `ConfigStore::save` immediately, so nothing the user changes lives only in
/// memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub user_name: String,
    pub theme: Theme,
    pub projects: BTreeMap<String, PathBuf>,
    pub last_project: Option<String>,
    pub snippets: BTreeMap<String, String>,
    pub preferences: Preferences,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            user_name: std::env::var("USER").unwrap_or_else(|_| "Developer".to_string()),
            theme: Theme::Dark,
            projects: BTreeMap::new(),
            last_project: None,
            snippets: BTreeMap::new(),
            preferences: Preferences::default(),
        }
    }
}

impl Settings {
    /// `last_project` must name a registered project; a dangling reference
    /// (hand-edited or partially written document) is cleared.
    fn normalize(&mut self) {
        if let Some(name) = &self.last_project
            && !self.projects.contains_key(name)
        {
            tracing::warn!(project = %name, "last_project not in registry, clearing");
            self.last_project = None;
        }
    }
}

/// Where the loaded settings came from. `Recovered` means the document on
/// disk was malformed and has been replaced with defaults; the caller should
/// warn the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Existing,
    Created,
    Recovered,
}

/// Owns the path of the settings document and all reads/writes against it.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.adamx/config.json`, falling back to the current directory when no
    /// home directory can be resolved.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(ADAMX_DIR)
            .join(CONFIG_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the settings document. A missing file yields persisted defaults
    /// (`Created`); malformed content is swallowed and likewise replaced with
    /// persisted defaults (`Recovered`). Only filesystem failures propagate.
    pub fn load(&self) -> Result<(Settings, LoadSource)> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let settings = Settings::default();
                self.save(&settings)?;
                return Ok((settings, LoadSource::Created));
            }
            Err(e) => return Err(Error::filesystem("read", &self.path, e)),
        };

        match serde_json::from_str::<Settings>(&content) {
            Ok(mut settings) => {
                settings.normalize();
                Ok((settings, LoadSource::Existing))
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed config, using defaults");
                let settings = Settings::default();
                self.save(&settings)?;
                Ok((settings, LoadSource::Recovered))
            }
        }
    }

    /// Serializes the full document (pretty-printed, 2-space indent),
    /// creating parent directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::filesystem("create directory", parent, e))?;
        }

        let mut content = serde_json::to_string_pretty(settings)
            .map_err(|e| Error::filesystem("serialize", &self.path, e.into()))?;
        content.push('\n');

        std::fs::write(&self.path, content)
            .map_err(|e| Error::filesystem("write", &self.path, e))?;

        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}
