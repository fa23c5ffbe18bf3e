use strum::IntoEnumIterator;

use crate::model::collection::Collection;
use crate::model::part::{PartType, Rarity};

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub unique_parts: usize,
    pub total_quantity: u64,
    pub total_combos: usize,
    /// Blade, Ratchet then Bit.
    pub categories: Vec<CategoryCount>,
    /// Quantity per rarity, in order of first appearance in the collection.
    pub rarities: Vec<(Rarity, u64)>,
    pub weight: Option<WeightStatistics>,
    pub most_owned: Option<MostOwned>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub part_type: PartType,
    pub unique: usize,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightStatistics {
    /// Sum of `weight * owned_quantity`.
    pub total: f64,
    /// Mean weight of distinct parts, not weighted by quantity.
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MostOwned {
    pub name: String,
    pub part_type: PartType,
    pub quantity: u32,
}

impl Statistics {
    pub fn from(collection: &Collection) -> Self {
        let parts = collection.parts();

        let categories = PartType::iter()
            .map(|part_type| {
                let of_type = collection.get_parts_by_type(part_type);
                CategoryCount {
                    part_type,
                    unique: of_type.len(),
                    total: of_type.iter().map(|p| u64::from(p.owned_quantity)).sum(),
                }
            })
            .collect();

        let mut rarities: Vec<(Rarity, u64)> = vec![];
        for part in parts {
            let quantity = u64::from(part.owned_quantity);
            match rarities.iter_mut().find(|(r, _)| *r == part.rarity) {
                Some((_, count)) => *count += quantity,
                None => rarities.push((part.rarity, quantity)),
            }
        }

        let weighted: Vec<(f64, u32)> = parts
            .iter()
            .filter_map(|p| p.weight.map(|w| (w, p.owned_quantity)))
            .collect();
        let weight = if weighted.is_empty() {
            None
        } else {
            let total: f64 = weighted.iter().map(|(w, q)| w * f64::from(*q)).sum();
            let average =
                weighted.iter().map(|(w, _)| w).sum::<f64>() / weighted.len() as f64;
            Some(WeightStatistics { total, average })
        };

        let mut most_owned: Option<MostOwned> = None;
        for part in parts {
            let is_higher = most_owned
                .as_ref()
                .map_or(true, |m| part.owned_quantity > m.quantity);
            if is_higher {
                most_owned = Some(MostOwned {
                    name: part.name.clone(),
                    part_type: part.part_type,
                    quantity: part.owned_quantity,
                });
            }
        }

        Self {
            unique_parts: parts.len(),
            total_quantity: parts.iter().map(|p| u64::from(p.owned_quantity)).sum(),
            total_combos: collection.combos().len(),
            categories,
            rarities,
            weight,
            most_owned,
        }
    }
}
