use std::{fs, path::Path};

use bx_manager::display::Display;
use bx_manager::model::collection::Collection;
use trycmd::TestCases;

use super::paths::get_init_files;

pub fn init_cli_test(dir: &Path, test_name: &str) -> TestCases {
    let cfg = dir.join("bx-manager.toml");

    let case = trycmd::TestCases::new();

    case.case(format!("tests/cli/{test_name}/{test_name}.toml"))
        .env("BXMANAGER_DATA_DIR", dir.to_display())
        .env("BXMANAGER_CONFIG", cfg.to_display())
        .env("BXMANAGER_NO_COLOR", "1");

    case
}

pub fn attach_test_files(dir: &Path) {
    let collection_source = get_init_files().join("collection.json");
    let collection_target = dir.join("collection.json");
    fs::copy(collection_source, collection_target).unwrap();
}

pub fn read_collection(dir: &Path) -> Collection {
    let content = fs::read_to_string(dir.join("collection.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}
