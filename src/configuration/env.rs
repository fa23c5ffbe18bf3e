use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::configuration::{Configuration, ConfigurationError};

use super::ConfigurationDirectoryType;

#[derive(Debug, Error, PartialEq)]
#[error("Could not read value of environment variable {name}: {source}")]
pub struct UnreadableVarError {
    name: String,
    source: env::VarError,
}

fn var(name: &str) -> Result<Option<String>, UnreadableVarError> {
    match std::env::var(name) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(UnreadableVarError {
            name: name.to_string(),
            source: e,
        }),
    }
}

fn with_prefix(base_name: &str) -> String {
    format!("BXMANAGER_{}", base_name)
}

fn bool_var(name: &str) -> Result<Option<bool>, ConfigurationError> {
    let var_name = with_prefix(name);
    match var(&var_name)? {
        None => Ok(None),
        Some(val) if val == "1" => Ok(Some(true)),
        Some(val) if val == "0" => Ok(Some(false)),
        Some(val) => Err(ConfigurationError::InvalidValueError {
            got: val,
            expected: "[0,1]".to_string(),
            origin: format!("env var '{}'", var_name),
        }),
    }
}

pub fn get_directory(
    dir_type: &ConfigurationDirectoryType,
) -> Result<Option<PathBuf>, UnreadableVarError> {
    let dir = match dir_type {
        ConfigurationDirectoryType::Data => var(&with_prefix("DATA_DIR"))?,
        ConfigurationDirectoryType::Configuration => match var(&with_prefix("CONFIG"))? {
            Some(cfg_file) => Path::new(&cfg_file)
                .parent()
                .and_then(|p| p.to_str())
                .map(|p| p.to_string()),
            None => None,
        },
    };
    Ok(dir.map(PathBuf::from))
}

pub fn get_config_file() -> Result<Option<PathBuf>, UnreadableVarError> {
    if let Some(cfg_file) = var(&with_prefix("CONFIG"))? {
        return Ok(Some(PathBuf::from(cfg_file)));
    }
    Ok(None)
}

pub struct EnvironmentVariablesConfiguration<T: Configuration> {
    default: T,
}

impl<T: Configuration> EnvironmentVariablesConfiguration<T> {
    pub fn new(default: T) -> Self {
        EnvironmentVariablesConfiguration { default }
    }
}

impl<T: Configuration> Configuration for EnvironmentVariablesConfiguration<T> {
    fn no_color(&self) -> Result<Option<bool>, ConfigurationError> {
        if let Some(no_color) = bool_var("NO_COLOR")? {
            return Ok(Some(no_color));
        }
        self.default.no_color()
    }

    fn collection_file(&self) -> Result<Option<PathBuf>, ConfigurationError> {
        if let Some(file) = var(&with_prefix("COLLECTION"))? {
            return Ok(Some(PathBuf::from(file)));
        }
        self.default.collection_file()
    }

    fn default_condition(&self) -> Result<String, ConfigurationError> {
        if let Some(condition) = var(&with_prefix("DEFAULT_CONDITION"))? {
            return Ok(condition);
        }
        self.default.default_condition()
    }

    fn unique_combo_names(&self) -> Result<bool, ConfigurationError> {
        if let Some(unique) = bool_var("UNIQUE_COMBO_NAMES")? {
            return Ok(unique);
        }
        self.default.unique_combo_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::default::DefaultConfiguration;

    #[test]
    fn test_var_present() {
        let var_name = "BXMANAGER_TEST_EXISTING_VAR";
        let var_value = "some_value";
        std::env::set_var(var_name, var_value);

        let result = var(var_name);

        assert_eq!(result, Ok(Some(var_value.to_string())));
    }

    #[test]
    fn test_var_not_present() {
        // Arrange
        let var_name = "BXMANAGER_TEST_NON_EXISTING_VAR";
        std::env::remove_var(var_name);

        // Act
        let result = var(var_name);

        // Assert
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_bool_var_values() {
        std::env::set_var("BXMANAGER_TEST_BOOL_ON", "1");
        std::env::set_var("BXMANAGER_TEST_BOOL_OFF", "0");
        std::env::set_var("BXMANAGER_TEST_BOOL_BAD", "yes");

        assert_eq!(bool_var("TEST_BOOL_ON").unwrap(), Some(true));
        assert_eq!(bool_var("TEST_BOOL_OFF").unwrap(), Some(false));
        assert_eq!(bool_var("TEST_BOOL_MISSING").unwrap(), None);
        assert!(matches!(
            bool_var("TEST_BOOL_BAD"),
            Err(ConfigurationError::InvalidValueError { .. })
        ));
    }

    #[test]
    fn test_falls_back_to_default() {
        let cfg = EnvironmentVariablesConfiguration::new(DefaultConfiguration);
        if std::env::var("BXMANAGER_DEFAULT_CONDITION").is_err() {
            assert_eq!(cfg.default_condition().unwrap(), "New");
        }
    }
}
