use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::Preset;
use crate::configuration::{Configuration, ConfigurationError};
use crate::model::part::PartType;

use super::ConfigurationDirectoryType;

/// Beyblade X collection manager
///
/// Catalog owned blades, ratchets and bits, assemble combos and follow collection statistics.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to data directory, which store the collection file. The directory will be created if it doesn't exist.
    #[arg(global = true, long)]
    pub data_directory: Option<PathBuf>,
    /// Path to the collection file. Overrides the data directory.
    #[arg(global = true, long)]
    pub collection: Option<PathBuf>,
    /// Path to configuration file.
    #[arg(global = true, long)]
    pub config: Option<PathBuf>,
    /// Disable all output formating options.
    #[arg(global = true, long)]
    pub no_color: bool,
    /// Force enabling formating options, useful in context where it wouldn't be supported (such as piping to another command).
    #[arg(global = true, long)]
    pub force_color: bool,
    /// Disable all logging and most normal output.
    #[arg(global = true, short, long)]
    pub quiet: bool,
    /// Set verbosity level ('v', 'vv' or 'vvv')
    #[arg(global = true, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum Commands {
    /// Setup configuration file and data directory
    Init,
    /// Browse the reference catalog of known parts
    Catalog(CatalogOptions),
    /// Manage owned parts
    Part(PartOptions),
    /// Manage assembled combos
    Combo(ComboOptions),
    /// Display collection statistics
    Stats(StatsOptions),
}

#[derive(clap::Args, Debug, PartialEq, Clone)]
pub struct CatalogOptions {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum CatalogCommands {
    /// List known parts
    Ls(CatalogLsOptions),
}

#[derive(clap::Args, Debug, PartialEq, Clone)]
pub struct CatalogLsOptions {
    /// Generate command result as JSON output on stdout.
    #[arg(long)]
    pub json: bool,
    /// Only list parts of this type (blade, ratchet, bit)
    #[arg(long = "type", short = 't')]
    pub part_type: Option<PartType>,
    /// Partial name to search for (case insensitive)
    #[arg(long, short)]
    pub search: Option<String>,
}

#[derive(clap::Args, Debug, PartialEq, Clone)]
pub struct PartOptions {
    #[command(subcommand)]
    pub command: PartCommands,
}

#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum PartCommands {
    /// Add catalog parts to the collection
    Add(PartAddOptions),
    /// Remove owned parts from the collection
    Rm(PartRmOptions),
    /// List owned parts
    Ls(PartLsOptions),
    /// Display one owned part
    Show(PartShowOptions),
}

#[derive(clap::Args, Debug, PartialEq, Clone)]
pub struct PartAddOptions {
    /// Exact catalog name of the part. Prompted when missing.
    #[clap(index = 1)]
    pub name: Option<String>,
    /// Type of the part (blade, ratchet, bit)
    #[arg(long = "type", short = 't', required_unless_present = "preset")]
    pub part_type: Option<PartType>,
    /// Add every part of a predefined set (starter, battle, common) instead of a single part
    #[arg(long, conflicts_with_all = ["name", "part_type"])]
    pub preset: Option<Preset>,
    /// Number of parts to add
    #[arg(long, short = 'n', default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub quantity: u32,
    /// Condition of the added parts (New, Like New, Good, Fair, Poor...). Defaults to the configured condition.
    #[arg(long, short)]
    pub condition: Option<String>,
}

#[derive(clap::Args, Debug, PartialEq, Clone)]
pub struct PartRmOptions {
    /// Name of the owned part
    #[clap(index = 1)]
    pub name: String,
    /// Type of the part (blade, ratchet, bit)
    #[arg(long = "type", short = 't')]
    pub part_type: PartType,
    /// Number of parts to remove
    #[arg(long, short = 'n', default_value = "1")]
    pub quantity: u32,
}

#[derive(clap::Args, Debug, PartialEq, Clone)]
pub struct PartLsOptions {
    /// Generate command result as JSON output on stdout.
    #[arg(long)]
    pub json: bool,
    /// Only list parts of this type (blade, ratchet, bit)
    #[arg(long = "type", short = 't')]
    pub part_type: Option<PartType>,
}

#[derive(clap::Args, Debug, PartialEq, Clone)]
pub struct PartShowOptions {
    /// Generate command result as JSON output on stdout.
    #[arg(long)]
    pub json: bool,
    /// Name of the owned part
    #[clap(index = 1)]
    pub name: String,
    /// Type of the part (blade, ratchet, bit)
    #[arg(long = "type", short = 't')]
    pub part_type: PartType,
}

#[derive(clap::Args, Debug, PartialEq, Clone)]
pub struct ComboOptions {
    #[command(subcommand)]
    pub command: ComboCommands,
}

#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum ComboCommands {
    /// Assemble a combo from owned parts
    Add(ComboAddOptions),
    /// Delete a combo
    Rm(ComboRmOptions),
    /// List combos
    Ls(ComboLsOptions),
}

#[derive(clap::Args, Debug, PartialEq, Clone)]
pub struct ComboAddOptions {
    /// Name of the combo
    #[clap(index = 1)]
    pub name: String,
    /// Owned blade
    #[arg(long)]
    pub blade: String,
    /// Owned ratchet
    #[arg(long)]
    pub ratchet: String,
    /// Owned bit
    #[arg(long)]
    pub bit: String,
    /// Free text notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(clap::Args, Debug, PartialEq, Clone)]
pub struct ComboRmOptions {
    /// Name of the combo. Only the first combo with this name is removed.
    #[clap(index = 1)]
    pub name: String,
}

#[derive(clap::Args, Debug, PartialEq, Clone)]
pub struct ComboLsOptions {
    /// Generate command result as JSON output on stdout.
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug, PartialEq, Clone)]
pub struct StatsOptions {
    /// Generate command result as JSON output on stdout.
    #[arg(long)]
    pub json: bool,
}

impl Commands {
    /// Whether the command asked for JSON on stdout.
    pub fn json(&self) -> bool {
        match self {
            Commands::Init => false,
            Commands::Catalog(opts) => match &opts.command {
                CatalogCommands::Ls(ls) => ls.json,
            },
            Commands::Part(opts) => match &opts.command {
                PartCommands::Ls(ls) => ls.json,
                PartCommands::Show(show) => show.json,
                PartCommands::Add(_) | PartCommands::Rm(_) => false,
            },
            Commands::Combo(opts) => match &opts.command {
                ComboCommands::Ls(ls) => ls.json,
                ComboCommands::Add(_) | ComboCommands::Rm(_) => false,
            },
            Commands::Stats(opts) => opts.json,
        }
    }
}

pub fn get_directory(args: &Args, dir_type: &ConfigurationDirectoryType) -> Option<PathBuf> {
    match dir_type {
        ConfigurationDirectoryType::Data => args.data_directory.clone(),
        ConfigurationDirectoryType::Configuration => {
            if let Some(cfg) = &args.config {
                return cfg.parent().map(|p| p.to_path_buf());
            }
            None
        }
    }
}

pub struct CLIConfiguration<T: Configuration> {
    args: Args,
    default: T,
}

impl<T: Configuration> CLIConfiguration<T> {
    pub fn new(args: &Args, default: T) -> Self {
        CLIConfiguration {
            args: args.clone(),
            default,
        }
    }
}

impl<T: Configuration> Configuration for CLIConfiguration<T> {
    fn no_color(&self) -> Result<Option<bool>, ConfigurationError> {
        if self.args.no_color {
            return Ok(Some(true));
        }
        self.default.no_color()
    }

    fn collection_file(&self) -> Result<Option<PathBuf>, ConfigurationError> {
        if let Some(file) = self.args.collection.clone() {
            return Ok(Some(file));
        }
        self.default.collection_file()
    }

    fn default_condition(&self) -> Result<String, ConfigurationError> {
        let condition = match &self.args.command {
            Commands::Part(PartOptions {
                command: PartCommands::Add(add),
            }) => add.condition.clone(),
            _ => None,
        };
        if let Some(condition) = condition {
            return Ok(condition);
        }
        self.default.default_condition()
    }

    fn unique_combo_names(&self) -> Result<bool, ConfigurationError> {
        self.default.unique_combo_names()
    }
}
