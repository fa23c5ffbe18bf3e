use std::io;

use colored::{ColoredString, Colorize};
use thiserror::Error;

use crate::configuration::{
    ConfigurationError, ConfigurationInitializationError, FSRessourcesError,
};
use crate::filesystem::{DirectoryCreationError, FSReadError, FSWriteError};
use crate::logging::StdoutError;
use crate::model::collection::{AddPartError, DuplicateComboName, RemovePartError};
use crate::model::combo::ComboError;
use crate::model::part::PartType;

pub trait Advice {
    fn advice(&self) -> Option<ColoredString>;
}

#[derive(Debug, Error)]
pub enum BxError {
    #[error(transparent)]
    FSRessourcesError(#[from] FSRessourcesError),
    #[error(transparent)]
    EnvironmentError(#[from] EnvironmentError),
    #[error(transparent)]
    DirectoryCreationError(#[from] DirectoryCreationError),
    #[error(transparent)]
    ConfigurationInitializationError(#[from] ConfigurationInitializationError),
    #[error(transparent)]
    FSReadError(#[from] FSReadError),
    #[error(transparent)]
    FSWriteError(#[from] FSWriteError),
    #[error(transparent)]
    ModelError(#[from] ModelError),
    #[error(transparent)]
    StdoutError(#[from] StdoutError),
}

impl Advice for BxError {
    fn advice(&self) -> Option<ColoredString> {
        match self {
            BxError::ModelError(ModelError::NotInCatalog { part_type, .. }) => Some(
                format!(
                    "Call {} to list known parts.",
                    format!("bx-manager catalog ls --type {}", part_type.to_string().to_lowercase())
                        .bold()
                )
                .as_str()
                .into(),
            ),
            BxError::ModelError(ModelError::PartNotOwned { .. })
            | BxError::ModelError(ModelError::RemovingPart {
                source: RemovePartError::NotFound { .. },
            })
            | BxError::ModelError(ModelError::AssemblingCombo {
                source: ComboError::PartNotOwned { .. },
            }) => Some(
                format!("Call {} to list owned parts.", "bx-manager part ls".bold())
                    .as_str()
                    .into(),
            ),
            BxError::ModelError(ModelError::MissingCategories { .. }) => Some(
                format!(
                    "Call {} to add a basic blade, ratchet and bit.",
                    "bx-manager part add --preset starter".bold()
                )
                .as_str()
                .into(),
            ),
            BxError::ModelError(ModelError::ComboNotFound { .. }) => Some(
                format!("Call {} to list combos.", "bx-manager combo ls".bold())
                    .as_str()
                    .into(),
            ),
            BxError::FSReadError(FSReadError::InvalidRecord { .. }) => Some(
                "The collection file was left untouched. Fix or move it away to start over."
                    .into(),
            ),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("Error when reading input '{description}': {source}")]
    SpecificInputError {
        description: String,
        source: inquire::InquireError,
    },
    #[error("Data directory unknown")]
    DataDirectoryUnknown,
    #[error("Collection file location unknown")]
    CollectionFileUnknown,
    #[error("A part type (--type) is required when no preset is given")]
    PartTypeRequired,
    #[error("Could not load configuration '{option_name}': {source}")]
    ConfigurationOptionLoading {
        option_name: String,
        source: ConfigurationError,
    },
    #[error("Configuration path could not be determined.")]
    ConfigurationFilePathNotFound,
    #[error("Could not serialize configuration to TOML format: {source}")]
    TOMLConfigurationSerilizationError { source: toml::ser::Error },
    #[error("Could not write TOML configuration to file '{path}': {source}")]
    TOMLConfigurationWriteError { path: String, source: io::Error },
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{part_type} '{name}' is not in the catalog")]
    NotInCatalog { name: String, part_type: PartType },
    #[error("{part_type} '{name}' is not in the collection")]
    PartNotOwned { name: String, part_type: PartType },
    #[error("Could not add part: {source}")]
    AddingPart { source: AddPartError },
    #[error("Could not remove part: {source}")]
    RemovingPart { source: RemovePartError },
    #[error("Could not assemble combo: {source}")]
    AssemblingCombo { source: ComboError },
    #[error("Could not add combo: {source}")]
    AddingCombo { source: DuplicateComboName },
    #[error("Combo '{name}' not found")]
    ComboNotFound { name: String },
    #[error("Could not assemble combo: no {} owned", display_types(.categories))]
    MissingCategories { categories: Vec<PartType> },
}

fn display_types(types: &[PartType]) -> String {
    types
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
