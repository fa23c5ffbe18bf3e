use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::model::combo::Combo;
use crate::model::common::Identified;
use crate::model::part::{Part, PartType};

/// Owned parts and assembled combos of a user.
///
/// Parts are unique by `(name, part_type)` and never kept at a quantity of zero.
/// Both lists keep insertion order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Collection {
    #[serde(default)]
    parts: Vec<Part>,
    #[serde(default)]
    combos: Vec<Combo>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddPartError {
    #[error("quantity to add must be at least 1")]
    InvalidQuantity,
    #[error("cannot add {added} x {part_type} '{name}': {owned} already owned, the total would exceed {max}", max = u32::MAX)]
    QuantityOverflow {
        name: String,
        part_type: PartType,
        owned: u32,
        added: u32,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemovePartError {
    #[error("quantity to remove must be at least 1")]
    InvalidQuantity,
    #[error("{part_type} '{name}' is not in the collection")]
    NotFound { name: String, part_type: PartType },
    #[error("cannot remove {requested} x {part_type} '{name}': only {owned} owned")]
    InsufficientQuantity {
        name: String,
        part_type: PartType,
        owned: u32,
        requested: u32,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("a combo named '{name}' already exists")]
pub struct DuplicateComboName {
    pub name: String,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn combos(&self) -> &[Combo] {
        &self.combos
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty() && self.combos.is_empty()
    }

    /// Merges `part` into the entry with the same name and type, or appends it.
    /// Returns the quantity owned afterwards.
    ///
    /// On merge only the quantity is taken from `part`. The collection is left
    /// unchanged on error.
    pub fn add_part(&mut self, part: Part) -> Result<u32, AddPartError> {
        if part.owned_quantity == 0 {
            return Err(AddPartError::InvalidQuantity);
        }
        let (name, part_type) = part.id();
        match self.find_part_mut(&name, part_type) {
            Some(existing) => {
                let owned = existing
                    .owned_quantity
                    .checked_add(part.owned_quantity)
                    .ok_or(AddPartError::QuantityOverflow {
                        name,
                        part_type,
                        owned: existing.owned_quantity,
                        added: part.owned_quantity,
                    })?;
                existing.owned_quantity = owned;
                Ok(owned)
            }
            None => {
                let owned = part.owned_quantity;
                self.parts.push(part);
                Ok(owned)
            }
        }
    }

    /// Returns the quantity left after removal. The entry is dropped when it reaches zero.
    pub fn remove_part(
        &mut self,
        name: &str,
        part_type: PartType,
        quantity: u32,
    ) -> Result<u32, RemovePartError> {
        if quantity == 0 {
            return Err(RemovePartError::InvalidQuantity);
        }
        let index = self
            .parts
            .iter()
            .position(|p| p.is(name, part_type))
            .ok_or_else(|| RemovePartError::NotFound {
                name: name.to_string(),
                part_type,
            })?;

        let part = &mut self.parts[index];
        if part.owned_quantity < quantity {
            return Err(RemovePartError::InsufficientQuantity {
                name: name.to_string(),
                part_type,
                owned: part.owned_quantity,
                requested: quantity,
            });
        }
        part.owned_quantity -= quantity;
        let remaining = part.owned_quantity;
        if remaining == 0 {
            self.parts.remove(index);
        }
        Ok(remaining)
    }

    pub fn find_part(&self, name: &str, part_type: PartType) -> Option<&Part> {
        self.parts.iter().find(|p| p.is(name, part_type))
    }

    pub fn find_part_mut(&mut self, name: &str, part_type: PartType) -> Option<&mut Part> {
        self.parts.iter_mut().find(|p| p.is(name, part_type))
    }

    pub fn get_parts_by_type(&self, part_type: PartType) -> Vec<&Part> {
        self.parts
            .iter()
            .filter(|p| p.part_type == part_type)
            .collect()
    }

    /// Categories without any owned part, in Blade, Ratchet, Bit order.
    pub fn missing_categories(&self) -> Vec<PartType> {
        PartType::iter()
            .filter(|part_type| !self.parts.iter().any(|p| p.part_type == *part_type))
            .collect()
    }

    /// Appends `combo` even if another combo already carries the same name.
    pub fn add_combo(&mut self, combo: Combo) {
        self.combos.push(combo);
    }

    pub fn add_unique_combo(&mut self, combo: Combo) -> Result<(), DuplicateComboName> {
        if self.find_combo(&combo.name).is_some() {
            return Err(DuplicateComboName { name: combo.name });
        }
        self.add_combo(combo);
        Ok(())
    }

    pub fn find_combo(&self, name: &str) -> Option<&Combo> {
        self.combos.iter().find(|c| c.name == name)
    }

    /// Removes the first combo named `name`.
    pub fn remove_combo(&mut self, name: &str) -> Option<Combo> {
        let index = self.combos.iter().position(|c| c.name == name)?;
        Some(self.combos.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::part::Rarity;

    fn part(name: &str, part_type: PartType, quantity: u32) -> Part {
        Part::new(name, part_type, "BX-01", Rarity::Common, Some(36.2), None)
            .with_quantity(quantity)
    }

    fn combo(name: &str) -> Combo {
        Combo::new(
            name,
            part("Dran Sword", PartType::Blade, 1),
            part("3-60", PartType::Ratchet, 1),
            part("Flat", PartType::Bit, 1),
            None,
        )
    }

    #[test]
    fn test_add_part_merges_quantities() {
        let mut collection = Collection::new();
        for quantity in [1, 4, 2] {
            collection.add_part(part("Dran Sword", PartType::Blade, quantity)).unwrap();
        }

        assert_eq!(collection.parts().len(), 1);
        assert_eq!(
            collection
                .find_part("Dran Sword", PartType::Blade)
                .unwrap()
                .owned_quantity,
            7
        );
    }

    #[test]
    fn test_add_part_merge_keeps_existing_condition() {
        let mut collection = Collection::new();
        let template = part("Dran Sword", PartType::Blade, 0);
        collection.add_part(Part::owned(&template, 1, "New")).unwrap();
        collection.add_part(Part::owned(&template, 1, "Poor")).unwrap();

        let found = collection.find_part("Dran Sword", PartType::Blade).unwrap();
        assert_eq!(found.condition, "New");
        assert_eq!(found.owned_quantity, 2);
    }

    #[test]
    fn test_same_name_different_type_are_distinct() {
        let mut collection = Collection::new();
        collection.add_part(part("Flat", PartType::Bit, 1)).unwrap();
        collection.add_part(part("Flat", PartType::Blade, 1)).unwrap();

        assert_eq!(collection.parts().len(), 2);
    }

    #[test]
    fn test_remove_part_decrements() {
        let mut collection = Collection::new();
        collection.add_part(part("Dran Sword", PartType::Blade, 3)).unwrap();

        let remaining = collection.remove_part("Dran Sword", PartType::Blade, 2);

        assert_eq!(remaining, Ok(1));
        assert_eq!(
            collection
                .find_part("Dran Sword", PartType::Blade)
                .unwrap()
                .owned_quantity,
            1
        );
    }

    #[test]
    fn test_remove_part_to_zero_drops_entry() {
        let mut collection = Collection::new();
        collection.add_part(part("Dran Sword", PartType::Blade, 2)).unwrap();
        collection.add_part(part("3-60", PartType::Ratchet, 1)).unwrap();

        assert_eq!(collection.remove_part("Dran Sword", PartType::Blade, 2), Ok(0));
        assert!(collection.find_part("Dran Sword", PartType::Blade).is_none());
        assert_eq!(collection.parts().len(), 1);
    }

    #[test]
    fn test_remove_unknown_part_fails_without_change() {
        let mut collection = Collection::new();
        collection.add_part(part("Dran Sword", PartType::Blade, 2)).unwrap();
        let before = collection.clone();

        let result = collection.remove_part("Dran Sword", PartType::Bit, 1);

        assert_eq!(
            result,
            Err(RemovePartError::NotFound {
                name: "Dran Sword".to_string(),
                part_type: PartType::Bit,
            })
        );
        assert_eq!(collection, before);
    }

    #[test]
    fn test_remove_more_than_owned_fails_without_change() {
        let mut collection = Collection::new();
        collection.add_part(part("Dran Sword", PartType::Blade, 2)).unwrap();
        let before = collection.clone();

        let result = collection.remove_part("Dran Sword", PartType::Blade, 3);

        assert_eq!(
            result,
            Err(RemovePartError::InsufficientQuantity {
                name: "Dran Sword".to_string(),
                part_type: PartType::Blade,
                owned: 2,
                requested: 3,
            })
        );
        assert_eq!(collection, before);
    }

    #[test]
    fn test_remove_zero_is_rejected() {
        let mut collection = Collection::new();
        collection.add_part(part("Dran Sword", PartType::Blade, 2)).unwrap();
        let before = collection.clone();

        assert_eq!(
            collection.remove_part("Dran Sword", PartType::Blade, 0),
            Err(RemovePartError::InvalidQuantity)
        );
        assert_eq!(collection, before);
    }

    #[test]
    fn test_keys_stay_unique_through_mixed_operations() {
        let mut collection = Collection::new();
        collection.add_part(part("Dran Sword", PartType::Blade, 1)).unwrap();
        collection.add_part(part("3-60", PartType::Ratchet, 2)).unwrap();
        collection.remove_part("Dran Sword", PartType::Blade, 1).unwrap();
        collection.add_part(part("Dran Sword", PartType::Blade, 3)).unwrap();
        collection.add_part(part("3-60", PartType::Ratchet, 1)).unwrap();
        collection.add_part(part("Dran Sword", PartType::Blade, 1)).unwrap();

        let keys: HashSet<(String, PartType)> =
            collection.parts().iter().map(|p| p.id()).collect();
        assert_eq!(keys.len(), collection.parts().len());
        assert_eq!(keys.len(), 2);
        assert_eq!(collection.parts()[0].name, "3-60");
    }

    #[test]
    fn test_get_parts_by_type_keeps_insertion_order() {
        let mut collection = Collection::new();
        collection.add_part(part("Wizard Arrow", PartType::Blade, 1)).unwrap();
        collection.add_part(part("3-60", PartType::Ratchet, 1)).unwrap();
        collection.add_part(part("Dran Sword", PartType::Blade, 1)).unwrap();
        collection.add_part(part("Flat", PartType::Bit, 1)).unwrap();

        let blades: Vec<&str> = collection
            .get_parts_by_type(PartType::Blade)
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(blades, vec!["Wizard Arrow", "Dran Sword"]);
        assert!(collection.get_parts_by_type(PartType::Bit).len() == 1);
    }

    #[test]
    fn test_add_combo_allows_duplicate_names() {
        let mut collection = Collection::new();
        collection.add_combo(combo("Starter"));
        collection.add_combo(combo("Starter"));

        assert_eq!(collection.combos().len(), 2);
    }

    #[test]
    fn test_add_unique_combo_rejects_duplicates() {
        let mut collection = Collection::new();
        collection.add_unique_combo(combo("Starter")).unwrap();

        assert_eq!(
            collection.add_unique_combo(combo("Starter")),
            Err(DuplicateComboName {
                name: "Starter".to_string()
            })
        );
        assert_eq!(collection.combos().len(), 1);
    }

    #[test]
    fn test_remove_combo_removes_first_match_only() {
        let mut collection = Collection::new();
        let mut first = combo("Starter");
        first.notes = Some("first".to_string());
        collection.add_combo(first);
        collection.add_combo(combo("Other"));
        collection.add_combo(combo("Starter"));

        let removed = collection.remove_combo("Starter").unwrap();

        assert_eq!(removed.notes, Some("first".to_string()));
        assert_eq!(collection.combos().len(), 2);
        assert_eq!(collection.combos()[1].name, "Starter");
    }

    #[test]
    fn test_remove_unknown_combo_fails() {
        let mut collection = Collection::new();
        collection.add_combo(combo("Starter"));

        assert!(collection.remove_combo("Nope").is_none());
        assert_eq!(collection.combos().len(), 1);
    }

    #[test]
    fn test_add_part_overflow_leaves_entry_unchanged() {
        let mut collection = Collection::new();
        collection
            .add_part(part("Dran Sword", PartType::Blade, u32::MAX))
            .unwrap();
        let before = collection.clone();

        let result = collection.add_part(part("Dran Sword", PartType::Blade, 1));

        assert_eq!(
            result,
            Err(AddPartError::QuantityOverflow {
                name: "Dran Sword".to_string(),
                part_type: PartType::Blade,
                owned: u32::MAX,
                added: 1,
            })
        );
        assert_eq!(collection, before);
    }

    #[test]
    fn test_add_part_returns_owned_quantity() {
        let mut collection = Collection::new();
        assert_eq!(collection.add_part(part("Flat", PartType::Bit, 2)), Ok(2));
        assert_eq!(collection.add_part(part("Flat", PartType::Bit, 3)), Ok(5));
    }

    #[test]
    fn test_add_part_zero_is_rejected() {
        let mut collection = Collection::new();

        assert_eq!(
            collection.add_part(part("Flat", PartType::Bit, 0)),
            Err(AddPartError::InvalidQuantity)
        );
        assert!(collection.parts().is_empty());
    }

    #[test]
    fn test_missing_categories() {
        let mut collection = Collection::new();
        assert_eq!(
            collection.missing_categories(),
            vec![PartType::Blade, PartType::Ratchet, PartType::Bit]
        );

        collection.add_part(part("3-60", PartType::Ratchet, 1)).unwrap();

        assert_eq!(
            collection.missing_categories(),
            vec![PartType::Blade, PartType::Bit]
        );
    }
}
