use std::path::PathBuf;

use crate::configuration::{Configuration, ConfigurationError};
use crate::model::part::DEFAULT_CONDITION;

pub struct DefaultConfiguration;

impl Configuration for DefaultConfiguration {
    fn no_color(&self) -> Result<Option<bool>, ConfigurationError> {
        Ok(None)
    }

    fn collection_file(&self) -> Result<Option<PathBuf>, ConfigurationError> {
        Ok(None)
    }

    fn default_condition(&self) -> Result<String, ConfigurationError> {
        Ok(DEFAULT_CONDITION.to_string())
    }

    fn unique_combo_names(&self) -> Result<bool, ConfigurationError> {
        Ok(false)
    }
}
