use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::configuration::cli::CatalogLsOptions;
use crate::display;
use crate::errors::BxError;
use crate::logging::{self, Message, Stdout, Verbosity};
use crate::model::part::{Part, PartType, Rarity};

pub fn ls(catalog: &Catalog, opts: &CatalogLsOptions) -> Result<(), BxError> {
    let search = opts.search.clone().unwrap_or_default();
    logging::trace!("Search catalog for '{}' (type: {:?})", search, opts.part_type);
    let parts = catalog.search(&search, opts.part_type);
    logging::stdoutln(CatalogLSStdout::from(parts))?;
    Ok(())
}

#[derive(Serialize)]
struct CatalogLSStdout {
    parts: Vec<CatalogPartStdout>,
}

impl Stdout for CatalogLSStdout {}

impl CatalogLSStdout {
    fn from(parts: Vec<&Part>) -> Self {
        let parts = parts.into_iter().map(CatalogPartStdout::from).collect();
        Self { parts }
    }
}

impl Message for CatalogLSStdout {
    fn standard(&self, verbosity: Verbosity) -> ColoredString {
        if self.parts.is_empty() {
            return ColoredString::from("No catalog part found.");
        }
        let mut all_parts = String::new();
        for part in &self.parts {
            all_parts += part.standard(verbosity).to_string().as_str();
        }
        ColoredString::from(all_parts.as_str())
    }
}

#[derive(Serialize)]
struct CatalogPartStdout {
    name: String,
    part_type: PartType,
    series: String,
    rarity: Rarity,
    weight: Option<f64>,
    description: Option<String>,
}

impl CatalogPartStdout {
    fn from(part: &Part) -> Self {
        Self {
            name: part.name.clone(),
            part_type: part.part_type,
            series: part.series.clone(),
            rarity: part.rarity,
            weight: part.weight,
            description: part.description.clone(),
        }
    }
}

impl Message for CatalogPartStdout {
    fn standard(&self, _: Verbosity) -> ColoredString {
        let weight = self.weight.map(display::grams).unwrap_or_default();
        ColoredString::from(
            format!(
                "{:<8}{:<20}{:<10}{:<12}{:>6}\n",
                self.part_type.to_string(),
                self.name.bold(),
                self.series,
                self.rarity.to_string(),
                weight
            )
            .as_str(),
        )
    }
}
