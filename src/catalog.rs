use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display as StrumDisplay, EnumIter, EnumString};

use crate::model::part::{Part, PartType, Rarity};

const STARTER_SET: [(&str, PartType); 3] = [
    ("Dran Sword", PartType::Blade),
    ("3-60", PartType::Ratchet),
    ("Flat", PartType::Bit),
];

const BATTLE_SET_SIZE: usize = 5;

/// Predefined sets of catalog parts added in one go.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, EnumString, EnumIter, StrumDisplay)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Preset {
    /// Dran Sword, 3-60 and Flat.
    Starter,
    /// First five entries of each category.
    Battle,
    /// Every Common part.
    Common,
}

/// Read-only reference table of every known part, split by category.
///
/// Built once at startup and handed to whatever needs it.
#[derive(Debug, Clone)]
pub struct Catalog {
    blades: Vec<Part>,
    ratchets: Vec<Part>,
    bits: Vec<Part>,
}

impl Catalog {
    pub fn new(blades: Vec<Part>, ratchets: Vec<Part>, bits: Vec<Part>) -> Self {
        Self {
            blades,
            ratchets,
            bits,
        }
    }

    pub fn builtin() -> Self {
        Self::new(blades(), ratchets(), bits())
    }

    pub fn parts(&self, part_type: PartType) -> &[Part] {
        match part_type {
            PartType::Blade => &self.blades,
            PartType::Ratchet => &self.ratchets,
            PartType::Bit => &self.bits,
        }
    }

    /// Blades, then ratchets, then bits.
    pub fn all(&self) -> impl Iterator<Item = &Part> {
        self.blades
            .iter()
            .chain(self.ratchets.iter())
            .chain(self.bits.iter())
    }

    pub fn find(&self, name: &str, part_type: PartType) -> Option<&Part> {
        self.parts(part_type).iter().find(|p| p.name == name)
    }

    /// Case-insensitive match on part names, optionally restricted to one category.
    pub fn search(&self, term: &str, part_type: Option<PartType>) -> Vec<&Part> {
        let term = term.trim().to_lowercase();
        let candidates: Box<dyn Iterator<Item = &Part> + '_> = match part_type {
            Some(part_type) => Box::new(self.parts(part_type).iter()),
            None => Box::new(self.all()),
        };
        candidates
            .filter(|p| term.is_empty() || p.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Templates of a preset, in catalog order.
    pub fn preset(&self, preset: Preset) -> Vec<&Part> {
        match preset {
            Preset::Starter => STARTER_SET
                .iter()
                .filter_map(|(name, part_type)| self.find(name, *part_type))
                .collect(),
            Preset::Battle => PartType::iter()
                .flat_map(|part_type| self.parts(part_type).iter().take(BATTLE_SET_SIZE))
                .collect(),
            Preset::Common => self.all().filter(|p| p.rarity == Rarity::Common).collect(),
        }
    }

    /// Owned copy of the catalog entry, or `None` when the part is unknown.
    pub fn instantiate(
        &self,
        name: &str,
        part_type: PartType,
        quantity: u32,
        condition: &str,
    ) -> Option<Part> {
        self.find(name, part_type)
            .map(|template| Part::owned(template, quantity, condition))
    }
}

fn template(
    name: &str,
    part_type: PartType,
    series: &str,
    rarity: Rarity,
    weight: f64,
    description: &str,
) -> Part {
    Part::new(name, part_type, series, rarity, Some(weight), Some(description))
}

fn blades() -> Vec<Part> {
    use PartType::Blade;
    use Rarity::*;
    vec![
        template("Dran Sword", Blade, "BX-01", Common, 36.2, "Attack type blade with sword-like design"),
        template("Hell's Scythe", Blade, "BX-02", Common, 32.8, "Attack type blade with scythe motif"),
        template("Wizard Arrow", Blade, "BX-03", Common, 35.1, "Balance type blade with arrow design"),
        template("Knight Shield", Blade, "BX-04", Common, 38.9, "Defense type blade with shield design"),
        template("Shark Edge", Blade, "BX-05", Common, 34.7, "Attack type blade with shark fin design"),
        template("Dran Buster", Blade, "BX-06", Rare, 37.3, "Enhanced version of Dran Sword"),
        template("Phoenix Wing", Blade, "BX-07", Rare, 33.5, "Stamina type blade with wing design"),
        template("Cobalt Dragoon", Blade, "BX-08", Rare, 36.8, "Attack type blade with dragon motif"),
        template("Tyranno Beat", Blade, "BX-09", SuperRare, 39.2, "Heavy attack blade with dinosaur design"),
        template("Leon Crest", Blade, "BX-10", SuperRare, 35.9, "Balance type blade with lion design"),
        template("Viper Tail", Blade, "BX-11", Common, 34.1, "Attack type blade with viper design"),
        template("Phoenix Feather", Blade, "BX-12", Common, 33.8, "Stamina type blade with feather motif"),
        template("Whale Wave", Blade, "BX-13", Rare, 37.9, "Defense type blade with wave pattern"),
        template("Spider Web", Blade, "BX-14", Rare, 35.4, "Balance type blade with web design"),
        template("Tiger Claw", Blade, "BX-15", SuperRare, 38.1, "Attack type blade with claw pattern"),
        template("Eagle Eye", Blade, "BX-16", SuperRare, 34.6, "Stamina type blade with eye design"),
        template("Rhino Horn", Blade, "BX-17", Rare, 39.5, "Defense type blade with horn design"),
        template("Wolf Fang", Blade, "BX-18", Common, 35.7, "Attack type blade with fang pattern"),
        template("Falcon Wing", Blade, "BX-19", Rare, 33.2, "Balance type blade with wing design"),
        template("Scorpion Spear", Blade, "BX-20", UltraRare, 40.3, "Ultimate attack blade with spear design"),
        template("Dran Sword (Gold)", Blade, "BX-01G", UltraRare, 36.8, "Golden version of Dran Sword"),
        template("Phoenix Wing (Crystal)", Blade, "BX-07C", UltraRare, 34.1, "Crystal clear Phoenix Wing"),
        template("Leon Crest (Black)", Blade, "BX-10B", UltraRare, 36.4, "Black limited edition Leon Crest"),
    ]
}

fn ratchets() -> Vec<Part> {
    use PartType::Ratchet;
    use Rarity::*;
    vec![
        template("3-60", Ratchet, "Standard", Common, 6.2, "3-sided ratchet, 6.0mm height"),
        template("4-60", Ratchet, "Standard", Common, 6.4, "4-sided ratchet, 6.0mm height"),
        template("5-60", Ratchet, "Standard", Common, 6.6, "5-sided ratchet, 6.0mm height"),
        template("6-60", Ratchet, "Standard", Common, 6.8, "6-sided ratchet, 6.0mm height"),
        template("7-60", Ratchet, "Standard", Rare, 7.0, "7-sided ratchet, 6.0mm height"),
        template("8-60", Ratchet, "Standard", Rare, 7.2, "8-sided ratchet, 6.0mm height"),
        template("9-60", Ratchet, "Special", SuperRare, 8.2, "9-sided ratchet, 6.0mm height"),
        template("3-70", Ratchet, "Standard", Common, 6.8, "3-sided ratchet, 7.0mm height"),
        template("4-70", Ratchet, "Standard", Common, 7.0, "4-sided ratchet, 7.0mm height"),
        template("5-70", Ratchet, "Standard", Common, 7.2, "5-sided ratchet, 7.0mm height"),
        template("6-70", Ratchet, "Standard", Rare, 7.4, "6-sided ratchet, 7.0mm height"),
        template("7-70", Ratchet, "Standard", Rare, 7.6, "7-sided ratchet, 7.0mm height"),
        template("8-70", Ratchet, "Standard", SuperRare, 7.8, "8-sided ratchet, 7.0mm height"),
        template("3-80", Ratchet, "Standard", Rare, 7.4, "3-sided ratchet, 8.0mm height"),
        template("4-80", Ratchet, "Standard", Rare, 7.6, "4-sided ratchet, 8.0mm height"),
        template("5-80", Ratchet, "Standard", Rare, 7.8, "5-sided ratchet, 8.0mm height"),
        template("6-80", Ratchet, "Standard", SuperRare, 8.0, "6-sided ratchet, 8.0mm height"),
        template("1-60", Ratchet, "Special", UltraRare, 5.8, "Single-sided ratchet, ultra-low profile"),
        template("2-60", Ratchet, "Special", SuperRare, 6.0, "2-sided ratchet, balanced design"),
        template("10-75", Ratchet, "Special", UltraRare, 8.5, "10-sided ratchet, ultimate performance"),
    ]
}

fn bits() -> Vec<Part> {
    use PartType::Bit;
    use Rarity::*;
    vec![
        template("Flat", Bit, "Standard", Common, 2.1, "Aggressive attack bit with flat tip"),
        template("Rush", Bit, "Standard", Rare, 2.6, "High-speed attack bit"),
        template("Low Flat", Bit, "Special", SuperRare, 2.0, "Low-profile flat bit for aggressive attack"),
        template("Xtreme", Bit, "Special", SuperRare, 2.3, "Ultra-aggressive attack bit"),
        template("Accel", Bit, "Standard", Rare, 2.4, "Fast attack bit with acceleration"),
        template("Hunter", Bit, "Special", Rare, 2.2, "Attack bit with hunting movement"),
        template("Point", Bit, "Standard", Common, 2.3, "Stamina bit with sharp point"),
        template("Needle", Bit, "Standard", Rare, 2.2, "High stamina bit with needle tip"),
        template("Survive", Bit, "Standard", Common, 2.1, "Basic stamina bit for endurance"),
        template("Eternal", Bit, "Special", SuperRare, 2.5, "Ultimate stamina bit with free-spinning tip"),
        template("Revolve", Bit, "Standard", Rare, 2.3, "Stamina bit with revolving mechanism"),
        template("Ball", Bit, "Standard", Common, 2.5, "Defense bit with ball tip"),
        template("Defense", Bit, "Standard", Common, 2.7, "Basic defense bit for stability"),
        template("Guard", Bit, "Standard", Rare, 2.8, "Heavy defense bit with guard ring"),
        template("Massive", Bit, "Special", SuperRare, 3.2, "Ultra-heavy defense bit"),
        template("Orb", Bit, "Standard", Common, 2.4, "Balance bit with orb tip"),
        template("Taper", Bit, "Standard", Rare, 2.4, "Balance bit with tapered tip"),
        template("High Taper", Bit, "Special", SuperRare, 2.7, "Elevated taper bit for unique movement"),
        template("Unite", Bit, "Special", SuperRare, 2.6, "Dual-mode balance bit"),
        template("Variable", Bit, "Special", Rare, 2.5, "Adaptive balance bit"),
        template("Gear Ball", Bit, "Special", UltraRare, 3.1, "Motorized ball bit with gear mechanism"),
        template("Motor", Bit, "Special", UltraRare, 3.5, "Fully motorized bit for sustained spin"),
        template("Bearing", Bit, "Special", UltraRare, 2.8, "Precision bearing bit for maximum stamina"),
        template("Atomic", Bit, "Special", UltraRare, 2.9, "Free-spinning ball bit with ultimate defense"),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_builtin_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.parts(PartType::Blade).len(), 23);
        assert_eq!(catalog.parts(PartType::Ratchet).len(), 20);
        assert_eq!(catalog.parts(PartType::Bit).len(), 24);
        assert_eq!(catalog.all().count(), 67);
    }

    #[test]
    fn test_entries_are_complete_templates() {
        let catalog = Catalog::builtin();
        for part_type in PartType::iter() {
            for part in catalog.parts(part_type) {
                assert_eq!(part.part_type, part_type, "{} misfiled", part.name);
                assert_eq!(part.owned_quantity, 0);
                assert!(part.weight.map_or(false, |w| w > 0.0));
                assert!(part.description.is_some());
            }
        }
    }

    #[test]
    fn test_names_unique_per_category() {
        let catalog = Catalog::builtin();
        let keys: HashSet<(String, PartType)> = catalog
            .all()
            .map(|p| (p.name.clone(), p.part_type))
            .collect();
        assert_eq!(keys.len(), catalog.all().count());
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::builtin();
        let part = catalog.find("Dran Sword", PartType::Blade).unwrap();
        assert_eq!(part.series, "BX-01");
        assert_eq!(part.rarity, Rarity::Common);
        assert_eq!(part.weight, Some(36.2));
        assert!(catalog.find("Dran Sword", PartType::Bit).is_none());
    }

    #[test]
    fn test_search_by_term_and_type() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog
            .search("TAPER", Some(PartType::Bit))
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Taper", "High Taper"]);

        let phoenix = catalog.search("phoenix", None);
        assert_eq!(phoenix.len(), 3);
        assert!(catalog.search("phoenix", Some(PartType::Bit)).is_empty());
    }

    #[test]
    fn test_search_empty_term_lists_everything() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.search("", None).len(), 67);
        assert_eq!(catalog.search("  ", Some(PartType::Ratchet)).len(), 20);
    }

    #[test]
    fn test_instantiate() {
        let catalog = Catalog::builtin();
        let part = catalog
            .instantiate("3-60", PartType::Ratchet, 2, "Good")
            .unwrap();
        assert_eq!(part.owned_quantity, 2);
        assert_eq!(part.condition, "Good");
        assert_eq!(part.weight, Some(6.2));
        assert_eq!(catalog.find("3-60", PartType::Ratchet).unwrap().owned_quantity, 0);
        assert!(catalog.instantiate("3-61", PartType::Ratchet, 1, "New").is_none());
    }

    #[test]
    fn test_starter_preset() {
        let catalog = Catalog::builtin();
        let ids: Vec<(&str, PartType)> = catalog
            .preset(Preset::Starter)
            .iter()
            .map(|p| (p.name.as_str(), p.part_type))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("Dran Sword", PartType::Blade),
                ("3-60", PartType::Ratchet),
                ("Flat", PartType::Bit)
            ]
        );
    }

    #[test]
    fn test_battle_preset_takes_five_of_each() {
        let catalog = Catalog::builtin();
        let battle = catalog.preset(Preset::Battle);
        assert_eq!(battle.len(), 15);
        for part_type in PartType::iter() {
            let names: Vec<&str> = battle
                .iter()
                .filter(|p| p.part_type == part_type)
                .map(|p| p.name.as_str())
                .collect();
            let expected: Vec<&str> = catalog.parts(part_type)[..5]
                .iter()
                .map(|p| p.name.as_str())
                .collect();
            assert_eq!(names, expected);
        }
    }

    #[test]
    fn test_common_preset() {
        let catalog = Catalog::builtin();
        let common = catalog.preset(Preset::Common);
        assert_eq!(common.len(), 21);
        assert!(common.iter().all(|p| p.rarity == Rarity::Common));
    }

    #[test]
    fn test_preset_parsed_case_insensitively() {
        assert_eq!(Preset::from_str("starter"), Ok(Preset::Starter));
        assert_eq!(Preset::from_str("BATTLE"), Ok(Preset::Battle));
        assert!(Preset::from_str("rare").is_err());
        assert_eq!(Preset::Common.to_string(), "common");
    }
}
