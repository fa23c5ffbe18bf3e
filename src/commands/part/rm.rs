use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::configuration::cli::PartRmOptions;
use crate::errors::{BxError, ModelError};
use crate::logging::{self, Message, Stdout, Verbosity};
use crate::model::part::PartType;
use crate::workspace::Workspace;

pub fn rm(workspace: &mut Workspace, opts: &PartRmOptions) -> Result<(), BxError> {
    let remaining = workspace
        .collection_mut()
        .remove_part(&opts.name, opts.part_type, opts.quantity)
        .map_err(|source| ModelError::RemovingPart { source })?;
    workspace.save()?;

    logging::stdoutln(PartRmStdout {
        name: opts.name.clone(),
        part_type: opts.part_type,
        removed: opts.quantity,
        remaining,
    })?;
    Ok(())
}

#[derive(Serialize)]
struct PartRmStdout {
    name: String,
    part_type: PartType,
    removed: u32,
    remaining: u32,
}

impl Stdout for PartRmStdout {}

impl Message for PartRmStdout {
    fn standard(&self, verbosity: Verbosity) -> ColoredString {
        if verbosity == Verbosity::Quiet {
            return ColoredString::from("");
        }
        let left = match self.remaining {
            0 => "none left".to_string(),
            n => format!("{} left", n),
        };
        ColoredString::from(
            format!(
                "Removed {} x {} '{}' ({})",
                self.removed,
                self.part_type,
                self.name.bold(),
                left
            )
            .as_str(),
        )
    }
}
