use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::configuration::cli::ComboAddOptions;
use crate::errors::{BxError, ModelError};
use crate::logging::{self, Message, Stdout, Verbosity};
use crate::model::combo::Combo;
use crate::model::common::Named;
use crate::workspace::Workspace;

pub fn add(
    workspace: &mut Workspace,
    opts: &ComboAddOptions,
    unique_names: bool,
) -> Result<(), BxError> {
    let categories = workspace.collection().missing_categories();
    if !categories.is_empty() {
        return Err(ModelError::MissingCategories { categories }.into());
    }

    let combo = Combo::assemble(
        workspace.collection(),
        &opts.name,
        &opts.blade,
        &opts.ratchet,
        &opts.bit,
        opts.notes.as_deref(),
    )
    .map_err(|source| ModelError::AssemblingCombo { source })?;
    let out = ComboAddStdout::from(&combo);

    if unique_names {
        workspace
            .collection_mut()
            .add_unique_combo(combo)
            .map_err(|source| ModelError::AddingCombo { source })?;
    } else {
        if workspace.collection().find_combo(&out.name).is_some() {
            logging::info!("Another combo is already named '{}'", out.name);
        }
        workspace.collection_mut().add_combo(combo);
    }
    workspace.save()?;

    logging::stdoutln(out)?;
    Ok(())
}

#[derive(Serialize)]
struct ComboAddStdout {
    name: String,
    blade: String,
    ratchet: String,
    bit: String,
}

impl Stdout for ComboAddStdout {}

impl ComboAddStdout {
    fn from(combo: &Combo) -> Self {
        Self {
            name: combo.name(),
            blade: combo.blade.name(),
            ratchet: combo.ratchet.name(),
            bit: combo.bit.name(),
        }
    }
}

impl Message for ComboAddStdout {
    fn standard(&self, verbosity: Verbosity) -> ColoredString {
        if verbosity == Verbosity::Quiet {
            return ColoredString::from("");
        }
        ColoredString::from(
            format!(
                "Combo '{}' created: {} {} {}",
                self.name.bold(),
                self.blade,
                self.ratchet,
                self.bit
            )
            .as_str(),
        )
    }
}
