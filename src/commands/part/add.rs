use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::catalog::Preset;
use crate::configuration::cli::PartAddOptions;
use crate::errors::{BxError, EnvironmentError, ModelError};
use crate::interactive;
use crate::logging::{self, Message, Stdout, Verbosity};
use crate::model::part::{Part, PartType, CONDITIONS};
use crate::workspace::Workspace;

pub fn add(workspace: &mut Workspace, opts: &PartAddOptions, condition: &str) -> Result<(), BxError> {
    if !CONDITIONS.iter().any(|c| *c == condition) {
        logging::warning!(
            "Condition '{}' is not one of: {}",
            condition,
            CONDITIONS.join(", ")
        );
    }

    match (opts.preset, opts.part_type) {
        (Some(preset), _) => add_preset(workspace, preset, opts.quantity, condition),
        (None, Some(part_type)) => add_single(workspace, opts, part_type, condition),
        (None, None) => Err(EnvironmentError::PartTypeRequired.into()),
    }
}

fn add_single(
    workspace: &mut Workspace,
    opts: &PartAddOptions,
    part_type: PartType,
    condition: &str,
) -> Result<(), BxError> {
    let template = match &opts.name {
        Some(name) => {
            let name = name.trim();
            workspace
                .catalog()
                .find(name, part_type)
                .cloned()
                .ok_or_else(|| ModelError::NotInCatalog {
                    name: name.to_string(),
                    part_type,
                })?
        }
        None => match interactive::select_catalog_part(workspace.catalog(), part_type)? {
            Some(part) => part,
            None => return Ok(()),
        },
    };

    let added = add_to_collection(workspace, &template, opts.quantity, condition)?;
    workspace.save()?;

    logging::stdoutln(added)?;
    Ok(())
}

fn add_preset(
    workspace: &mut Workspace,
    preset: Preset,
    quantity: u32,
    condition: &str,
) -> Result<(), BxError> {
    let templates: Vec<Part> = workspace
        .catalog()
        .preset(preset)
        .into_iter()
        .cloned()
        .collect();
    logging::info!("Adding {} part(s) from preset '{}'", templates.len(), preset);

    let mut parts = vec![];
    for template in &templates {
        parts.push(add_to_collection(workspace, template, quantity, condition)?);
    }
    workspace.save()?;

    logging::stdoutln(PresetAddStdout { preset, parts })?;
    Ok(())
}

fn add_to_collection(
    workspace: &mut Workspace,
    template: &Part,
    quantity: u32,
    condition: &str,
) -> Result<PartAddStdout, BxError> {
    logging::debug!(
        "Adding {} x {} '{}' in condition '{}'",
        quantity,
        template.part_type,
        template.name,
        condition
    );
    let owned = workspace
        .collection_mut()
        .add_part(Part::owned(template, quantity, condition))
        .map_err(|source| ModelError::AddingPart { source })?;
    Ok(PartAddStdout {
        name: template.name.clone(),
        part_type: template.part_type,
        added: quantity,
        owned,
    })
}

#[derive(Serialize)]
struct PartAddStdout {
    name: String,
    part_type: PartType,
    added: u32,
    owned: u32,
}

impl Stdout for PartAddStdout {}

impl Message for PartAddStdout {
    fn standard(&self, verbosity: Verbosity) -> ColoredString {
        if verbosity == Verbosity::Quiet {
            return ColoredString::from("");
        }
        ColoredString::from(
            format!(
                "Added {} x {} '{}' ({} owned)",
                self.added,
                self.part_type,
                self.name.bold(),
                self.owned
            )
            .as_str(),
        )
    }
}

#[derive(Serialize)]
struct PresetAddStdout {
    preset: Preset,
    parts: Vec<PartAddStdout>,
}

impl Stdout for PresetAddStdout {}

impl Message for PresetAddStdout {
    fn standard(&self, verbosity: Verbosity) -> ColoredString {
        if verbosity == Verbosity::Quiet {
            return ColoredString::from("");
        }
        let mut out = format!(
            "Added {} part(s) from preset '{}'",
            self.parts.len(),
            self.preset.to_string().bold()
        );
        for part in &self.parts {
            out += format!(
                "\n\t{:<8}{} ({} owned)",
                part.part_type.to_string(),
                part.name,
                part.owned
            )
            .as_str();
        }
        ColoredString::from(out.as_str())
    }
}
