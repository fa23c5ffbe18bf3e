use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::configuration::cli::ComboLsOptions;
use crate::display;
use crate::errors::BxError;
use crate::logging::{self, Message, Stdout, Verbosity};
use crate::model::combo::Combo;
use crate::model::common::Named;
use crate::round::Round;
use crate::workspace::Workspace;

pub fn ls(workspace: &Workspace, _: &ComboLsOptions) -> Result<(), BxError> {
    logging::stdoutln(CombosLSStdout::from(workspace.collection().combos()))?;
    Ok(())
}

#[derive(Serialize)]
struct CombosLSStdout {
    combos: Vec<ComboStdout>,
}

impl Stdout for CombosLSStdout {}

impl CombosLSStdout {
    fn from(combos: &[Combo]) -> Self {
        let combos = combos.iter().map(ComboStdout::from).collect();
        Self { combos }
    }
}

impl Message for CombosLSStdout {
    fn standard(&self, verbosity: Verbosity) -> ColoredString {
        if self.combos.is_empty() {
            return ColoredString::from("No combos assembled.");
        }
        let mut all_combos = String::new();
        for combo in &self.combos {
            all_combos += combo.standard(verbosity).to_string().as_str();
        }
        ColoredString::from(all_combos.as_str())
    }
}

#[derive(Serialize)]
struct ComboStdout {
    name: String,
    blade: String,
    ratchet: String,
    bit: String,
    weight: Option<f64>,
    notes: Option<String>,
}

impl ComboStdout {
    fn from(combo: &Combo) -> Self {
        Self {
            name: combo.name(),
            blade: combo.blade.name(),
            ratchet: combo.ratchet.name(),
            bit: combo.bit.name(),
            weight: combo.weight().map(|w| w.specific_round(2)),
            notes: combo.notes.clone(),
        }
    }
}

impl Message for ComboStdout {
    fn standard(&self, _: Verbosity) -> ColoredString {
        let weight = match self.weight {
            Some(weight) => format!(" ({})", display::grams(weight)),
            None => String::new(),
        };
        let mut out = format!(
            "{}: {} {} {}{}\n",
            self.name.bold(),
            self.blade,
            self.ratchet,
            self.bit,
            weight
        );
        if let Some(notes) = &self.notes {
            out += format!("\t{}\n", notes).as_str();
        }
        ColoredString::from(out.as_str())
    }
}
