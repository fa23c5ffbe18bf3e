use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::configuration::cli::PartShowOptions;
use crate::display::{self, Display};
use crate::errors::{BxError, ModelError};
use crate::logging::{self, Message, Stdout, Verbosity};
use crate::model::part::{Part, PartType, Rarity};
use crate::workspace::Workspace;

pub fn show(workspace: &Workspace, opts: &PartShowOptions) -> Result<(), BxError> {
    let part = workspace
        .collection()
        .find_part(&opts.name, opts.part_type)
        .ok_or_else(|| ModelError::PartNotOwned {
            name: opts.name.clone(),
            part_type: opts.part_type,
        })?;
    logging::stdoutln(PartShowStdout::from(part))?;
    Ok(())
}

#[derive(Serialize)]
struct PartShowStdout {
    name: String,
    part_type: PartType,
    series: String,
    rarity: Rarity,
    weight: Option<f64>,
    description: Option<String>,
    owned_quantity: u32,
    condition: String,
}

impl Stdout for PartShowStdout {}

impl PartShowStdout {
    fn from(part: &Part) -> Self {
        Self {
            name: part.name.clone(),
            part_type: part.part_type,
            series: part.series.clone(),
            rarity: part.rarity,
            weight: part.weight,
            description: part.description.clone(),
            owned_quantity: part.owned_quantity,
            condition: part.condition.clone(),
        }
    }
}

impl Message for PartShowStdout {
    fn standard(&self, _: Verbosity) -> ColoredString {
        let weight = match self.weight {
            Some(weight) => display::grams(weight),
            None => "Unknown".to_string(),
        };
        let mut out = format!("{}\n", self.name.bold());
        out += format!("\tType:        {}\n", self.part_type).as_str();
        out += format!("\tSeries:      {}\n", self.series).as_str();
        out += format!("\tRarity:      {}\n", self.rarity).as_str();
        out += format!("\tWeight:      {}\n", weight).as_str();
        out += format!("\tOwned:       {}\n", self.owned_quantity.to_display()).as_str();
        out += format!("\tCondition:   {}", self.condition).as_str();
        if let Some(description) = &self.description {
            out += format!("\n\tDescription: {}", description).as_str();
        }
        ColoredString::from(out.as_str())
    }
}
