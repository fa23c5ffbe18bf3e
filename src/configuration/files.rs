use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::configuration::{Configuration, ConfigurationError};
use crate::display::Display;

use super::ConfigurationDirectoryType;

pub fn get_directory(dir_type: &ConfigurationDirectoryType) -> Option<PathBuf> {
    let directory = match dir_type {
        ConfigurationDirectoryType::Data => dirs::data_local_dir(),
        ConfigurationDirectoryType::Configuration => dirs::config_dir(),
    };
    directory.map(|mut d| {
        d.push("bx-manager");
        d
    })
}

pub struct FSConfiguration<T: Configuration> {
    cfg: Option<MainConfiguration>,
    default: T,
}

impl<T: Configuration> FSConfiguration<T> {
    pub fn new(cfg_file: Option<PathBuf>, default: T) -> Result<Self, MainConfigurationInitError> {
        let cfg = MainConfiguration::from(cfg_file)?;
        Ok(FSConfiguration { cfg, default })
    }

    fn collection(&self) -> Option<&CollectionConfiguration> {
        self.cfg.as_ref().and_then(|cfg| cfg.collection.as_ref())
    }
}

impl<T: Configuration> Configuration for FSConfiguration<T> {
    fn no_color(&self) -> Result<Option<bool>, ConfigurationError> {
        if let Some(no_color) = self
            .cfg
            .as_ref()
            .and_then(|cfg| cfg.display.as_ref())
            .and_then(|display| display.no_color)
        {
            return Ok(Some(no_color));
        }
        self.default.no_color()
    }

    fn collection_file(&self) -> Result<Option<PathBuf>, ConfigurationError> {
        if let Some(file) = self.collection().and_then(|c| c.file.clone()) {
            return Ok(Some(file));
        }
        self.default.collection_file()
    }

    fn default_condition(&self) -> Result<String, ConfigurationError> {
        if let Some(condition) = self.collection().and_then(|c| c.default_condition.clone()) {
            return Ok(condition);
        }
        self.default.default_condition()
    }

    fn unique_combo_names(&self) -> Result<bool, ConfigurationError> {
        if let Some(unique) = self
            .cfg
            .as_ref()
            .and_then(|cfg| cfg.combos.as_ref())
            .and_then(|combos| combos.unique_names)
        {
            return Ok(unique);
        }
        self.default.unique_combo_names()
    }
}

#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
pub struct MainConfiguration {
    pub collection: Option<CollectionConfiguration>,
    pub combos: Option<CombosConfiguration>,
    pub display: Option<DisplayConfiguration>,
}

#[derive(Debug, Error)]
pub enum MainConfigurationInitError {
    #[error("Check existence of configuration file ({path}): {source}")]
    ExistenceCheck {
        path: String,
        source: std::io::Error,
    },
    #[error("Read configuration file ({path}): {source}")]
    ReadConfigurationFile {
        path: String,
        source: std::io::Error,
    },
    #[error("Coule not deserialize configuration file ({path}): {source}")]
    ConfigurationFileDeserialization {
        path: String,
        source: toml::de::Error,
    },
}

impl MainConfiguration {
    fn from(path: Option<PathBuf>) -> Result<Option<Self>, MainConfigurationInitError> {
        let path = match &path {
            Some(path) => path,
            None => return Ok(None),
        };
        let exists =
            path.try_exists()
                .map_err(|e| MainConfigurationInitError::ExistenceCheck {
                    path: path.to_display(),
                    source: e,
                })?;
        if !exists {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            MainConfigurationInitError::ReadConfigurationFile {
                path: path.to_display(),
                source: e,
            }
        })?;
        let result: MainConfiguration = toml::from_str(&content).map_err(|e| {
            MainConfigurationInitError::ConfigurationFileDeserialization {
                path: path.to_display(),
                source: e,
            }
        })?;
        Ok(Some(result))
    }

    /// Configuration written by `init`, pointing at the given collection file.
    pub fn initial(collection_file: &Path, default_condition: &str) -> Self {
        MainConfiguration {
            collection: Some(CollectionConfiguration {
                file: Some(collection_file.to_path_buf()),
                default_condition: Some(default_condition.to_string()),
            }),
            combos: Some(CombosConfiguration {
                unique_names: Some(false),
            }),
            display: Some(DisplayConfiguration { no_color: None }),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct CollectionConfiguration {
    pub file: Option<PathBuf>,
    pub default_condition: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct CombosConfiguration {
    pub unique_names: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct DisplayConfiguration {
    pub no_color: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::default::DefaultConfiguration;

    fn write_config(content: &str) -> PathBuf {
        let dir = tempfile::tempdir().unwrap().into_path();
        let file = dir.join("bx-manager.toml");
        std::fs::write(&file, content).unwrap();
        file
    }

    #[test]
    fn test_get_directory_data() {
        let dir_type = ConfigurationDirectoryType::Data;
        let result = get_directory(&dir_type);
        assert_eq!(
            result,
            dirs::data_local_dir().map(|mut d| {
                d.push("bx-manager");
                d
            })
        );
    }

    #[test]
    fn test_get_directory_configuration() {
        let dir_type = ConfigurationDirectoryType::Configuration;
        let result = get_directory(&dir_type);
        assert_eq!(
            result,
            dirs::config_dir().map(|mut d| {
                d.push("bx-manager");
                d
            })
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap().into_path();
        let cfg = FSConfiguration::new(Some(dir.join("absent.toml")), DefaultConfiguration)
            .unwrap();

        assert_eq!(cfg.collection_file().unwrap(), None);
        assert_eq!(cfg.default_condition().unwrap(), "New");
        assert!(!cfg.unique_combo_names().unwrap());
        assert_eq!(cfg.no_color().unwrap(), None);
    }

    #[test]
    fn test_values_from_file() {
        let file = write_config(
            r#"
[collection]
file = "/tmp/my-collection.json"
default_condition = "Good"

[combos]
unique_names = true

[display]
no_color = true
"#,
        );
        let cfg = FSConfiguration::new(Some(file), DefaultConfiguration).unwrap();

        assert_eq!(
            cfg.collection_file().unwrap(),
            Some(PathBuf::from("/tmp/my-collection.json"))
        );
        assert_eq!(cfg.default_condition().unwrap(), "Good");
        assert!(cfg.unique_combo_names().unwrap());
        assert_eq!(cfg.no_color().unwrap(), Some(true));
    }

    #[test]
    fn test_partial_file() {
        let file = write_config("[combos]\nunique_names = true\n");
        let cfg = FSConfiguration::new(Some(file), DefaultConfiguration).unwrap();

        assert!(cfg.unique_combo_names().unwrap());
        assert_eq!(cfg.default_condition().unwrap(), "New");
    }

    #[test]
    fn test_invalid_file() {
        let file = write_config("[combos\nunique_names = ");
        let result = FSConfiguration::new(Some(file), DefaultConfiguration);

        assert!(matches!(
            result,
            Err(MainConfigurationInitError::ConfigurationFileDeserialization { .. })
        ));
    }

    #[test]
    fn test_initial_configuration_round_trip() {
        let initial = MainConfiguration::initial(Path::new("/data/collection.json"), "New");
        let content = toml::to_string(&initial).unwrap();
        let parsed: MainConfiguration = toml::from_str(&content).unwrap();

        assert_eq!(parsed, initial);
    }
}
