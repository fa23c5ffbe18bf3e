use std::io;
use std::path::{Path, PathBuf};

use serde_json::error::Category;
use thiserror::Error;

use crate::display::Display;
use crate::logging;
use crate::model::collection::Collection;

#[derive(Error, Debug)]
#[error("Directory could not be created (Path: '{path})': {source}")]
pub struct DirectoryCreationError {
    path: String,
    source: std::io::Error,
}

pub fn create_directory(dir_to_create: &Path) -> Result<(), DirectoryCreationError> {
    if !dir_to_create.exists() {
        let dir_display = dir_to_create.to_display();
        logging::debug!("Create directory: {}", &dir_display);
        std::fs::create_dir_all(dir_to_create).map_err(|e| DirectoryCreationError {
            path: dir_display,
            source: e,
        })?;
    }
    Ok(())
}

#[derive(Error, Debug)]
pub enum FSReadError {
    #[error("read file '{path}': {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid record in '{path}': {source}")]
    InvalidRecord {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum FSWriteError {
    #[error("write file '{path}': {source}")]
    WriteFileError {
        path: String,
        source: std::io::Error,
    },
    #[error("serialize json content of '{path}': {source}")]
    JSONSeserializationError {
        path: String,
        source: serde_json::Error,
    },
    #[error(transparent)]
    ParentDirectory {
        #[from]
        source: DirectoryCreationError,
    },
}

/// JSON file holding a collection.
pub struct FSData {
    collection_file: PathBuf,
}

impl FSData {
    pub fn new(collection_file: PathBuf) -> Self {
        logging::trace!("Collection file: {}", collection_file.to_display());
        FSData { collection_file }
    }
}

// Collection
impl FSData {
    /// Loads the stored collection.
    ///
    /// A missing file or content that is not JSON at all yields an empty collection.
    /// JSON records that don't match the expected shape (unknown part type or rarity,
    /// missing field...) fail the whole load.
    pub fn load_collection(&self) -> Result<Collection, FSReadError> {
        let path = &self.collection_file;
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                logging::info!("No collection found at {}", path.to_display());
                return Ok(Collection::new());
            }
            Err(source) => {
                return Err(FSReadError::ReadFile {
                    path: path.to_display(),
                    source,
                })
            }
        };

        let document: serde_json::Value = match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(e) if matches!(e.classify(), Category::Syntax | Category::Eof) => {
                logging::warning!(
                    "Collection file {} is not valid JSON, starting from an empty collection ({})",
                    path.to_display(),
                    e
                );
                return Ok(Collection::new());
            }
            Err(source) => {
                return Err(FSReadError::InvalidRecord {
                    path: path.to_display(),
                    source,
                })
            }
        };

        let collection: Collection =
            serde_json::from_value(document).map_err(|source| FSReadError::InvalidRecord {
                path: path.to_display(),
                source,
            })?;
        logging::debug!(
            "Loaded {} part(s) and {} combo(s) from {}",
            collection.parts().len(),
            collection.combos().len(),
            path.to_display()
        );
        Ok(collection)
    }

    pub fn save_collection(&self, collection: &Collection) -> Result<(), FSWriteError> {
        let path = &self.collection_file;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_directory(parent)?;
        }

        let content = serde_json::to_string_pretty(collection).map_err(|source| {
            FSWriteError::JSONSeserializationError {
                path: path.to_display(),
                source,
            }
        })?;
        std::fs::write(path, content).map_err(|source| FSWriteError::WriteFileError {
            path: path.to_display(),
            source,
        })?;
        logging::info!("File written: {}", path.to_display());
        Ok(())
    }
}

#[cfg(test)]
pub mod testutils {
    use std::{fs, path::PathBuf};

    use super::FSData;

    pub fn create_test_fs_data() -> (FSData, PathBuf) {
        let data_directory = tempfile::tempdir().unwrap().into_path();
        let collection_file = data_directory.join("collection.json");

        (FSData::new(collection_file.clone()), collection_file)
    }

    pub fn prewrite(path: &PathBuf, content: &str) {
        fs::write(path, content).unwrap();
    }
}
