use inquire::{InquireError, Select};

use crate::catalog::Catalog;
use crate::errors::{BxError, EnvironmentError};
use crate::model::part::{Part, PartType};

pub trait HandleInquireExitSignals<T> {
    fn handle_exit_signals(self) -> Result<Option<T>, InquireError>;
}

impl<T> HandleInquireExitSignals<T> for Result<T, InquireError> {
    fn handle_exit_signals(self) -> Result<Option<T>, InquireError> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(InquireError::OperationCanceled) => Ok(None),
            Err(InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Asks the user to pick a catalog entry of the given type. `None` when the prompt is cancelled.
pub fn select_catalog_part(
    catalog: &Catalog,
    part_type: PartType,
) -> Result<Option<Part>, BxError> {
    let parts = catalog.parts(part_type).to_vec();
    let part = Select::new(&format!("Select the {} to add:", part_type), parts)
        .with_page_size(15)
        .prompt()
        .handle_exit_signals()
        .map_err(|source| EnvironmentError::SpecificInputError {
            description: "select catalog part".to_string(),
            source,
        })?;
    Ok(part)
}
