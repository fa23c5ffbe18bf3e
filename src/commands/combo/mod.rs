use crate::commands::combo::add::add;
use crate::commands::combo::ls::ls;
use crate::commands::combo::rm::rm;
use crate::configuration::cli::{ComboCommands, ComboOptions};
use crate::configuration::Configuration;
use crate::errors::{BxError, EnvironmentError};
use crate::workspace::Workspace;

mod add;
mod ls;
mod rm;

pub fn combo(
    workspace: &mut Workspace,
    opts: &ComboOptions,
    cfg: &impl Configuration,
) -> Result<(), BxError> {
    match &opts.command {
        ComboCommands::Add(add_opts) => {
            let unique_names = cfg.unique_combo_names().map_err(|source| {
                EnvironmentError::ConfigurationOptionLoading {
                    option_name: "unique_combo_names".to_string(),
                    source,
                }
            })?;
            add(workspace, add_opts, unique_names)?;
        }
        ComboCommands::Rm(rm_opts) => {
            rm(workspace, rm_opts)?;
        }
        ComboCommands::Ls(ls_opts) => {
            ls(workspace, ls_opts)?;
        }
    }
    Ok(())
}
