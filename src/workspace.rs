use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::display::Display;
use crate::filesystem::{FSData, FSReadError, FSWriteError};
use crate::logging;
use crate::model::collection::Collection;

/// Catalog, collection and store used by one command.
pub struct Workspace {
    catalog: Catalog,
    collection: Collection,
    fs: FSData,
}

impl Workspace {
    pub fn open(collection_file: PathBuf, catalog: Catalog) -> Result<Self, FSReadError> {
        logging::debug!("Using collection file: {}", collection_file.to_display());
        let fs = FSData::new(collection_file);
        let collection = fs.load_collection()?;
        Ok(Workspace {
            catalog,
            collection,
            fs,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut Collection {
        &mut self.collection
    }

    pub fn save(&self) -> Result<(), FSWriteError> {
        self.fs.save_collection(&self.collection)
    }
}
