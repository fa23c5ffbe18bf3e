use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::display::{self, Display};
use crate::errors::BxError;
use crate::logging::{self, Message, Stdout, Verbosity};
use crate::model::collection::Collection;
use crate::model::part::{PartType, Rarity};
use crate::model::stats::Statistics;
use crate::round::Round;

pub fn stats(collection: &Collection) -> Result<(), BxError> {
    let statistics = Statistics::from(collection);
    logging::stdoutln(StatsStdout::from(statistics))?;
    Ok(())
}

#[derive(Serialize)]
struct StatsStdout {
    unique_parts: usize,
    total_quantity: u64,
    total_combos: usize,
    categories: Vec<CategoryStdout>,
    rarities: Vec<RarityStdout>,
    weight: Option<WeightStdout>,
    most_owned: Option<MostOwnedStdout>,
}

#[derive(Serialize)]
struct CategoryStdout {
    part_type: PartType,
    unique: usize,
    total: u64,
}

#[derive(Serialize)]
struct RarityStdout {
    rarity: Rarity,
    quantity: u64,
}

#[derive(Serialize)]
struct WeightStdout {
    total: f64,
    average: f64,
}

#[derive(Serialize)]
struct MostOwnedStdout {
    name: String,
    part_type: PartType,
    quantity: u32,
}

impl Stdout for StatsStdout {}

impl StatsStdout {
    fn from(statistics: Statistics) -> Self {
        Self {
            unique_parts: statistics.unique_parts,
            total_quantity: statistics.total_quantity,
            total_combos: statistics.total_combos,
            categories: statistics
                .categories
                .into_iter()
                .map(|c| CategoryStdout {
                    part_type: c.part_type,
                    unique: c.unique,
                    total: c.total,
                })
                .collect(),
            rarities: statistics
                .rarities
                .into_iter()
                .map(|(rarity, quantity)| RarityStdout { rarity, quantity })
                .collect(),
            weight: statistics.weight.map(|w| WeightStdout {
                total: w.total.specific_round(2),
                average: w.average.specific_round(2),
            }),
            most_owned: statistics.most_owned.map(|m| MostOwnedStdout {
                name: m.name,
                part_type: m.part_type,
                quantity: m.quantity,
            }),
        }
    }
}

impl Message for StatsStdout {
    fn standard(&self, _: Verbosity) -> ColoredString {
        let mut out = format!("{}\n", "Collection overview".underline());
        out += format!("\tUnique parts: {}\n", self.unique_parts.to_display()).as_str();
        out += format!("\tParts owned:  {}\n", self.total_quantity.to_display()).as_str();
        out += format!("\tCombos:       {}\n", self.total_combos.to_display()).as_str();

        out += format!("{}\n", "Parts by type".underline()).as_str();
        for category in &self.categories {
            out += format!(
                "\t{:<8}{} unique ({} total)\n",
                category.part_type.to_string(),
                category.unique,
                category.total
            )
            .as_str();
        }

        if !self.rarities.is_empty() {
            out += format!("{}\n", "Parts by rarity".underline()).as_str();
            for rarity in &self.rarities {
                out += format!("\t{:<12}{}\n", rarity.rarity.to_string(), rarity.quantity).as_str();
            }
        }

        if let Some(weight) = &self.weight {
            out += format!("{}\n", "Weight".underline()).as_str();
            out += format!("\tTotal:   {}g\n", weight.total.to_display()).as_str();
            out += format!("\tAverage: {}\n", display::grams(weight.average)).as_str();
        }

        if let Some(most_owned) = &self.most_owned {
            out += format!(
                "Most owned: {} {} (x{})",
                most_owned.part_type,
                most_owned.name.bold(),
                most_owned.quantity
            )
            .as_str();
        } else {
            out += "Collection is empty.";
        }
        ColoredString::from(out.as_str())
    }
}
