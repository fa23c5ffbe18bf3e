use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::configuration::cli::PartLsOptions;
use crate::errors::BxError;
use crate::logging::{self, Message, Stdout, Verbosity};
use crate::model::part::{Part, PartType, Rarity};
use crate::workspace::Workspace;

pub fn ls(workspace: &Workspace, opts: &PartLsOptions) -> Result<(), BxError> {
    let parts: Vec<&Part> = match opts.part_type {
        Some(part_type) => workspace.collection().get_parts_by_type(part_type),
        None => workspace.collection().parts().iter().collect(),
    };
    logging::stdoutln(PartsLSStdout::from(parts))?;
    Ok(())
}

#[derive(Serialize)]
struct PartsLSStdout {
    parts: Vec<PartStdout>,
}

impl Stdout for PartsLSStdout {}

impl PartsLSStdout {
    fn from(parts: Vec<&Part>) -> Self {
        let parts = parts.into_iter().map(PartStdout::from).collect();
        Self { parts }
    }
}

impl Message for PartsLSStdout {
    fn standard(&self, verbosity: Verbosity) -> ColoredString {
        if self.parts.is_empty() {
            return ColoredString::from("No parts owned.");
        }
        let mut all_parts = String::new();
        for part in &self.parts {
            all_parts += part.standard(verbosity).to_string().as_str();
        }
        ColoredString::from(all_parts.as_str())
    }
}

#[derive(Serialize)]
pub struct PartStdout {
    name: String,
    part_type: PartType,
    series: String,
    rarity: Rarity,
    weight: Option<f64>,
    owned_quantity: u32,
    condition: String,
}

impl PartStdout {
    pub fn from(part: &Part) -> Self {
        Self {
            name: part.name.clone(),
            part_type: part.part_type,
            series: part.series.clone(),
            rarity: part.rarity,
            weight: part.weight,
            owned_quantity: part.owned_quantity,
            condition: part.condition.clone(),
        }
    }
}

impl Message for PartStdout {
    fn standard(&self, _: Verbosity) -> ColoredString {
        ColoredString::from(
            format!(
                "{:<8}{:<20}{:>4}  {:<12}{}\n",
                self.part_type.to_string(),
                self.name.bold(),
                format!("x{}", self.owned_quantity),
                self.rarity.to_string(),
                self.condition
            )
            .as_str(),
        )
    }
}
