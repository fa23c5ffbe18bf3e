use std::{path::PathBuf, str::FromStr};

pub fn get_project_root() -> PathBuf {
    let root_path = env!("CARGO_MANIFEST_DIR");
    PathBuf::from_str(root_path).unwrap()
}

pub fn get_init_files() -> PathBuf {
    get_project_root().join("tests/helpers/resources/init_files")
}
