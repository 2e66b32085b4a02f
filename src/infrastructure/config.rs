use crate::domain::{
    config::DrawerctlConfig,
    error::{DrawerError, DrawerResult},
};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration manager
pub struct ConfigManager {
    global_config_path: PathBuf,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> DrawerResult<Self> {
        let global_config_path = Self::get_global_config_path()?;
        let project_config_path = Self::find_project_config_path();

        Ok(Self {
            global_config_path,
            project_config_path,
        })
    }

    /// Load configuration, preferring the project file over the global one.
    pub fn load_config(&self) -> DrawerResult<DrawerctlConfig> {
        let mut config = DrawerctlConfig::default();

        if self.global_config_path.exists() {
            config = self.load_config_from_path(&self.global_config_path)?;
        }

        if let Some(project_path) = &self.project_config_path {
            if project_path.exists() {
                config = self.load_config_from_path(project_path)?;
            }
        }

        Ok(config)
    }

    /// Get global configuration path
    fn get_global_config_path() -> DrawerResult<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| DrawerError::Config {
            message: "Could not determine home directory".to_string(),
        })?;

        Ok(home.join(".config").join("drawerctl").join("config.toml"))
    }

    /// Find project configuration path by walking up directory tree
    fn find_project_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut path = current_dir.as_path();

        loop {
            let config_path = path.join(".drawerctl").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> DrawerResult<DrawerctlConfig> {
        let content = fs::read_to_string(path).map_err(|e| DrawerError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| DrawerError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Get the current project config path (if any)
    pub fn get_project_config_path(&self) -> Option<&PathBuf> {
        self.project_config_path.as_ref()
    }

    /// Get the global config path
    pub fn get_global_config_path_ref(&self) -> &PathBuf {
        &self.global_config_path
    }
}
