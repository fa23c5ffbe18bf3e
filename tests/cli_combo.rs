use tempfile::tempdir;

use bx_manager::model::part::PartType;
use helpers::clitests;

mod helpers;

#[test]
fn cli_combo_ls() {
    let dir = tempdir().unwrap().into_path();

    clitests::attach_test_files(&dir);
    clitests::init_cli_test(&dir, "combo-ls").run();
}

#[test]
fn cli_combo_add_then_ls() {
    let dir = tempdir().unwrap().into_path();

    clitests::attach_test_files(&dir);
    clitests::init_cli_test(&dir, "combo-add").run();
    clitests::init_cli_test(&dir, "combo-ls-json").run();

    let collection = clitests::read_collection(&dir);
    assert_eq!(collection.combos().len(), 2);
    // Parts used by a combo stay in the collection.
    assert_eq!(
        collection
            .find_part("Wizard Arrow", PartType::Blade)
            .unwrap()
            .owned_quantity,
        1
    );
}

#[test]
fn cli_combo_add_missing_part() {
    let dir = tempdir().unwrap().into_path();

    clitests::attach_test_files(&dir);
    clitests::init_cli_test(&dir, "combo-add-missing-part").run();

    assert_eq!(clitests::read_collection(&dir).combos().len(), 1);
}

#[test]
fn cli_combo_rm() {
    let dir = tempdir().unwrap().into_path();

    clitests::attach_test_files(&dir);
    clitests::init_cli_test(&dir, "combo-rm").run();

    let collection = clitests::read_collection(&dir);
    assert!(collection.combos().is_empty());
    assert_eq!(collection.parts().len(), 4);
}

#[test]
fn cli_combo_rm_unknown() {
    let dir = tempdir().unwrap().into_path();

    clitests::attach_test_files(&dir);
    clitests::init_cli_test(&dir, "combo-rm-unknown").run();
}

#[test]
fn cli_combo_add_on_empty_collection() {
    let dir = tempdir().unwrap().into_path();

    clitests::init_cli_test(&dir, "combo-add-empty-collection").run();

    assert!(!dir.join("collection.json").exists());
}
