use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::configuration::cli::{Args, CLIConfiguration};
use crate::configuration::default::DefaultConfiguration;
use crate::configuration::env::EnvironmentVariablesConfiguration;
use crate::configuration::files::FSConfiguration;

pub mod cli;

pub mod env;

pub mod files;

pub mod default;

pub const COLLECTION_FILE_NAME: &str = "collection.json";

#[derive(Clone, Debug)]
pub enum ConfigurationDirectoryType {
    Data,
    Configuration,
}

impl std::fmt::Display for ConfigurationDirectoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConfigurationDirectoryType::Data => "Data",
            ConfigurationDirectoryType::Configuration => "Configuration",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Error)]
pub enum ConfigurationInitializationError {
    #[error(transparent)]
    SystemError {
        #[from]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

/// Layers, from highest priority: command line, environment variables, configuration file, defaults.
pub fn get(args: &Args) -> Result<impl Configuration, ConfigurationInitializationError> {
    let cfg_file = get_config_file(args)
        .map_err(Arc::from)
        .map_err(|e| ConfigurationInitializationError::SystemError { source: e })?;
    let cfg = FSConfiguration::new(cfg_file, DefaultConfiguration)
        .map_err(Arc::from)
        .map_err(|e| ConfigurationInitializationError::SystemError { source: e })?;
    let env_var_cfg = EnvironmentVariablesConfiguration::new(cfg);
    Ok(CLIConfiguration::new(args, env_var_cfg))
}

#[derive(Debug, Error)]
pub enum FSRessourcesError {
    #[error(transparent)]
    EnvVarError {
        #[from]
        source: env::UnreadableVarError,
    },
}

pub fn get_config_file(args: &Args) -> Result<Option<PathBuf>, FSRessourcesError> {
    if let Some(cfg_path) = args.config.clone() {
        return Ok(Some(cfg_path));
    } else if let Some(cfg_path) = env::get_config_file()? {
        return Ok(Some(cfg_path));
    } else if let Some(mut cfg_dir) = files::get_directory(&ConfigurationDirectoryType::Configuration)
    {
        cfg_dir.push("bx-manager.toml");
        return Ok(Some(cfg_dir));
    }
    Ok(None)
}

pub fn get_directory(
    dir_type: ConfigurationDirectoryType,
    args: &Args,
) -> Result<Option<PathBuf>, FSRessourcesError> {
    let dir = if let Some(dir) = cli::get_directory(args, &dir_type) {
        Some(dir)
    } else if let Some(dir) = env::get_directory(&dir_type)? {
        Some(dir)
    } else {
        files::get_directory(&dir_type)
    };
    Ok(dir)
}

/// Collection file configured through any layer, or `collection.json` in the data directory.
pub fn get_collection_file(
    args: &Args,
    cfg: &impl Configuration,
) -> Result<Option<PathBuf>, ConfigurationError> {
    if let Some(file) = cfg.collection_file()? {
        return Ok(Some(file));
    }
    let data_dir = get_directory(ConfigurationDirectoryType::Data, args).map_err(|e| match e {
        FSRessourcesError::EnvVarError { source } => ConfigurationError::EnvVarError(source),
    })?;
    Ok(data_dir.map(|d| d.join(COLLECTION_FILE_NAME)))
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error(transparent)]
    EnvVarError(#[from] env::UnreadableVarError),
    #[error("value '{got}' is not valid ('{expected}') - loaded from {origin}")]
    InvalidValueError {
        got: String,
        expected: String,
        origin: String,
    },
}

pub trait Configuration {
    fn no_color(&self) -> Result<Option<bool>, ConfigurationError>;

    fn collection_file(&self) -> Result<Option<PathBuf>, ConfigurationError>;

    fn default_condition(&self) -> Result<String, ConfigurationError>;

    fn unique_combo_names(&self) -> Result<bool, ConfigurationError>;
}
