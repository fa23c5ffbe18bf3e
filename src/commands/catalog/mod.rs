use crate::catalog::Catalog;
use crate::commands::catalog::ls::ls;
use crate::configuration::cli::{CatalogCommands, CatalogOptions};
use crate::errors::BxError;

mod ls;

pub fn catalog(catalog: &Catalog, opts: &CatalogOptions) -> Result<(), BxError> {
    match &opts.command {
        CatalogCommands::Ls(ls_opts) => {
            ls(catalog, ls_opts)?;
        }
    }
    Ok(())
}
