use std::path::Path;

use colored::Colorize;
use inquire::Confirm;

use crate::configuration::cli::Args;
use crate::configuration::files::MainConfiguration;
use crate::configuration::{
    self, get_config_file, ConfigurationDirectoryType, COLLECTION_FILE_NAME,
};
use crate::display::Display;
use crate::errors::{BxError, EnvironmentError};
use crate::filesystem;
use crate::interactive::HandleInquireExitSignals;
use crate::logging::{self, Msg};
use crate::model::part::DEFAULT_CONDITION;

pub fn init(args: &Args) -> Result<(), BxError> {
    let cfg_file = get_config_file(args)?.ok_or(EnvironmentError::ConfigurationFilePathNotFound)?;
    let data_dir = configuration::get_directory(ConfigurationDirectoryType::Data, args)?
        .ok_or(EnvironmentError::DataDirectoryUnknown)?;
    filesystem::create_directory(&data_dir)?;
    logging::debug!("Data directory ready: {}", data_dir.to_display());

    if cfg_file.exists() && !confirm_overwrite(&cfg_file)? {
        logging::println(Msg("Configuration left unchanged.".to_string()));
        return Ok(());
    }

    let collection_file = args
        .collection
        .clone()
        .unwrap_or_else(|| data_dir.join(COLLECTION_FILE_NAME));
    save_configuration(&cfg_file, &collection_file)?;

    logging::println(Msg(format!(
        "Configuration written to {}",
        cfg_file.to_display().bold()
    )));
    logging::println(Msg(format!(
        "Collection stored in {}",
        collection_file.to_display().bold()
    )));
    Ok(())
}

fn confirm_overwrite(cfg_file: &Path) -> Result<bool, BxError> {
    logging::println(Msg(format!(
        "Configuration file detected: {}",
        cfg_file.to_display().bold()
    )));
    let overwrite = Confirm::new("Do you want to overwrite it ?")
        .with_default(false)
        .prompt()
        .handle_exit_signals()
        .map_err(|source| EnvironmentError::SpecificInputError {
            description: "overwrite config".to_string(),
            source,
        })?;
    Ok(overwrite.unwrap_or(false))
}

fn save_configuration(cfg_file: &Path, collection_file: &Path) -> Result<(), BxError> {
    if let Some(cfg_dir) = cfg_file.parent() {
        filesystem::create_directory(cfg_dir)?;
    }
    let cfg = MainConfiguration::initial(collection_file, DEFAULT_CONDITION);
    let cfg_content = toml::to_string(&cfg)
        .map_err(|source| EnvironmentError::TOMLConfigurationSerilizationError { source })?;
    std::fs::write(cfg_file, cfg_content).map_err(|source| {
        EnvironmentError::TOMLConfigurationWriteError {
            path: cfg_file.to_display(),
            source,
        }
    })?;
    Ok(())
}
