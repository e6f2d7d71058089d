use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "wardiya.db";

/// Loads and saves `config.toml`.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the platform config location, falling back to the
    /// working directory when no home directory can be determined.
    pub fn from_default_location() -> Self {
        let path = project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings. A missing file yields defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Read settings, logging and falling back to defaults on any problem.
    pub fn get_or_default(&self) -> Settings {
        self.get().unwrap_or_else(|e| {
            log::warn!("Using default settings: {:#}", e);
            Settings::default()
        })
    }

    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create dir {}", parent.display()))?;
            }
        }

        let data = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        Ok(())
    }

    /// Apply `change` to the stored settings and save them.
    ///
    /// Starts from defaults when the file is missing or unreadable, so a
    /// broken config can be repaired from the command line.
    pub fn modify<F>(&self, change: F) -> Result<Settings>
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.get_or_default();
        change(&mut settings);
        self.update(&settings)?;
        Ok(settings)
    }
}

/// Where the key-value database lives unless `database_path` overrides it.
pub fn resolve_database_path(settings: &Settings) -> Result<PathBuf> {
    if let Some(ref path) = settings.database_path {
        return Ok(path.clone());
    }

    match project_dirs() {
        Some(dirs) => {
            let data_dir = dirs.data_dir();
            fs::create_dir_all(data_dir)
                .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
            Ok(data_dir.join(DATABASE_FILE))
        }
        None => Ok(PathBuf::from(DATABASE_FILE)),
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "Wardiya", "Wardiya")
}
