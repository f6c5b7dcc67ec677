//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::HomeCarbonError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .home-carbon.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use home_carbon::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("{} occupants", config.household.occupants);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(dir: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(dir, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(dir: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .home-carbon.toml");
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).map_err(|e| HomeCarbonError::InvalidConfig {
                reason: e.to_string(),
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Save config to .home-carbon.toml in the given directory
    pub fn save(config: &ConfigFile, dir: &Path) -> Result<()> {
        Self::save_with_fs(config, dir, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(config: &ConfigFile, dir: &Path, fs: &FS) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        fs.write(&config_path, contents)
            .map_err(|source| HomeCarbonError::Io {
                context: format!("writing {}", config_path.display()),
                source,
            })?;

        Ok(())
    }

    /// Check if a config file exists in the directory
    pub fn exists(dir: &Path) -> bool {
        Self::exists_with_fs(dir, &RealFileSystem)
    }

    /// Check for a config file with a custom filesystem implementation
    pub fn exists_with_fs<FS: FileSystem>(dir: &Path, fs: &FS) -> bool {
        fs.exists(&dir.join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::mock::MockFileSystem;

    #[test]
    fn test_loader_loads_from_valid_toml() {
        let temp = tempfile::tempdir().unwrap();
        let toml_content = r#"
[household]
occupants = 3

[report]
show-empty-rooms = true
"#;
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), toml_content).unwrap();

        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.household.occupants, 3);
        assert!(config.report.show_empty_rooms);
        assert_eq!(config.detection.confidence_threshold, 0.35);
    }

    #[test]
    fn test_loader_with_missing_file_uses_defaults() {
        let fs = MockFileSystem::default();
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_loader_with_invalid_toml_returns_config_error() {
        let fs = MockFileSystem::with_file("/test/.home-carbon.toml", "invalid { toml syntax");
        let err = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap_err();
        let typed = err.downcast_ref::<HomeCarbonError>().unwrap();
        assert_eq!(typed.exit_code(), 78);
    }

    #[test]
    fn test_loader_rejects_out_of_range_values() {
        let fs = MockFileSystem::with_file(
            "/test/.home-carbon.toml",
            "[household]\noccupants = 0\n",
        );
        let err = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap_err();
        assert!(err.to_string().contains("occupants"));
    }

    #[test]
    fn test_loader_with_permission_error_returns_error() {
        let fs = MockFileSystem {
            fail_reads: true,
            ..Default::default()
        };
        let err = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_loader_handles_empty_file() {
        let fs = MockFileSystem::with_file("/test/.home-carbon.toml", "");
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_writes_valid_toml() {
        let mut config = ConfigFile::default();
        config.household.occupants = 6;

        let fs = MockFileSystem::default();
        ConfigLoader::save_with_fs(&config, Path::new("/test"), &fs).unwrap();

        let written = fs
            .contents(Path::new("/test/.home-carbon.toml"))
            .unwrap();
        assert!(written.contains("occupants = 6"));
        assert!(ConfigLoader::exists_with_fs(Path::new("/test"), &fs));
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        let temp = tempfile::tempdir().unwrap();
        let mut config = ConfigFile::default();
        config.detection.confidence_threshold = 0.5;
        config.report.show_empty_rooms = true;

        ConfigLoader::save(&config, temp.path()).unwrap();
        assert!(ConfigLoader::exists(temp.path()));

        let loaded = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_exists_returns_false_for_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        assert!(!ConfigLoader::exists(temp.path()));
    }
}
