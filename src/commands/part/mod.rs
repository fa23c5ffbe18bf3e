use crate::commands::part::add::add;
use crate::commands::part::ls::ls;
use crate::commands::part::rm::rm;
use crate::commands::part::show::show;
use crate::configuration::cli::{PartCommands, PartOptions};
use crate::configuration::Configuration;
use crate::errors::{BxError, EnvironmentError};
use crate::workspace::Workspace;

pub mod add;
mod ls;
mod rm;
mod show;

pub fn part(
    workspace: &mut Workspace,
    opts: &PartOptions,
    cfg: &impl Configuration,
) -> Result<(), BxError> {
    match &opts.command {
        PartCommands::Add(add_opts) => {
            let condition = cfg.default_condition().map_err(|source| {
                EnvironmentError::ConfigurationOptionLoading {
                    option_name: "default_condition".to_string(),
                    source,
                }
            })?;
            add(workspace, add_opts, &condition)?;
        }
        PartCommands::Rm(rm_opts) => {
            rm(workspace, rm_opts)?;
        }
        PartCommands::Ls(ls_opts) => {
            ls(workspace, ls_opts)?;
        }
        PartCommands::Show(show_opts) => {
            show(workspace, show_opts)?;
        }
    }
    Ok(())
}
