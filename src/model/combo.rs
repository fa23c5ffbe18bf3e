use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::collection::Collection;
use crate::model::common::Named;
use crate::model::part::{Part, PartType};

/// A named assembly of one blade, one ratchet and one bit.
///
/// Parts are embedded as snapshots of the owned entries at assembly time, which
/// is also how they are persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Combo {
    pub name: String,
    pub blade: Part,
    pub ratchet: Part,
    pub bit: Part,
    pub notes: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComboError {
    #[error("combo name cannot be empty")]
    EmptyName,
    #[error("{part_type} '{name}' is not in the collection")]
    PartNotOwned { name: String, part_type: PartType },
}

impl Combo {
    pub fn new(name: &str, blade: Part, ratchet: Part, bit: Part, notes: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            blade,
            ratchet,
            bit,
            notes,
        }
    }

    /// Builds a combo from parts owned in `collection`, each looked up under its slot category.
    pub fn assemble(
        collection: &Collection,
        name: &str,
        blade: &str,
        ratchet: &str,
        bit: &str,
        notes: Option<&str>,
    ) -> Result<Self, ComboError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ComboError::EmptyName);
        }
        let blade = owned_part(collection, blade, PartType::Blade)?;
        let ratchet = owned_part(collection, ratchet, PartType::Ratchet)?;
        let bit = owned_part(collection, bit, PartType::Bit)?;
        let notes = notes
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(|n| n.to_string());

        Ok(Self::new(name, blade, ratchet, bit, notes))
    }

    pub fn parts(&self) -> [&Part; 3] {
        [&self.blade, &self.ratchet, &self.bit]
    }

    pub fn weight(&self) -> Option<f64> {
        self.parts().iter().map(|p| p.weight).sum()
    }
}

fn owned_part(collection: &Collection, name: &str, part_type: PartType) -> Result<Part, ComboError> {
    collection
        .find_part(name, part_type)
        .cloned()
        .ok_or_else(|| ComboError::PartNotOwned {
            name: name.to_string(),
            part_type,
        })
}

impl Named for Combo {
    fn name(&self) -> String {
        self.name.clone()
    }
}
