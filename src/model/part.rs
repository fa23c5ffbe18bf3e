use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumIter, EnumString};

use crate::model::common::{Identified, Named};

pub const DEFAULT_CONDITION: &str = "New";

/// Conditions proposed when adding a part interactively. Any free text is accepted.
pub const CONDITIONS: [&str; 5] = ["New", "Like New", "Good", "Fair", "Poor"];

#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum PartType {
    Blade,
    Ratchet,
    Bit,
}

#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Rarity {
    Common,
    Rare,
    #[serde(rename = "Super Rare")]
    #[strum(serialize = "Super Rare")]
    SuperRare,
    #[serde(rename = "Ultra Rare")]
    #[strum(serialize = "Ultra Rare")]
    UltraRare,
}

/// A kind of physical component: either a catalog template or an owned entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Part {
    pub name: String,
    pub part_type: PartType,
    pub series: String,
    pub rarity: Rarity,
    pub weight: Option<f64>,
    pub description: Option<String>,
    #[serde(default)]
    pub owned_quantity: u32,
    #[serde(default = "default_condition")]
    pub condition: String,
}

fn default_condition() -> String {
    DEFAULT_CONDITION.to_string()
}

impl Part {
    pub fn new(
        name: &str,
        part_type: PartType,
        series: &str,
        rarity: Rarity,
        weight: Option<f64>,
        description: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            part_type,
            series: series.to_string(),
            rarity,
            weight,
            description: description.map(|d| d.to_string()),
            owned_quantity: 0,
            condition: default_condition(),
        }
    }

    /// Copy of a template owned in `quantity` exemplars.
    pub fn owned(template: &Part, quantity: u32, condition: &str) -> Self {
        Self {
            owned_quantity: quantity,
            condition: condition.to_string(),
            ..template.clone()
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.owned_quantity = quantity;
        self
    }

    pub fn is(&self, name: &str, part_type: PartType) -> bool {
        self.name == name && self.part_type == part_type
    }
}

impl Named for Part {
    fn name(&self) -> String {
        self.name.clone()
    }
}

impl Identified<(String, PartType)> for Part {
    fn id(&self) -> (String, PartType) {
        (self.name.clone(), self.part_type)
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.rarity)
    }
}
