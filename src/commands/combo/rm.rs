use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::configuration::cli::ComboRmOptions;
use crate::errors::{BxError, ModelError};
use crate::logging::{self, Message, Stdout, Verbosity};
use crate::workspace::Workspace;

pub fn rm(workspace: &mut Workspace, opts: &ComboRmOptions) -> Result<(), BxError> {
    let combo = workspace
        .collection_mut()
        .remove_combo(&opts.name)
        .ok_or_else(|| ModelError::ComboNotFound {
            name: opts.name.clone(),
        })?;
    workspace.save()?;

    logging::stdoutln(ComboRmStdout { name: combo.name })?;
    Ok(())
}

#[derive(Serialize)]
struct ComboRmStdout {
    name: String,
}

impl Stdout for ComboRmStdout {}

impl Message for ComboRmStdout {
    fn standard(&self, verbosity: Verbosity) -> ColoredString {
        if verbosity == Verbosity::Quiet {
            return ColoredString::from("");
        }
        ColoredString::from(format!("Combo '{}' removed", self.name.bold()).as_str())
    }
}
