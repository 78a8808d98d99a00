use crate::common::command::{repository_dir, run_wit_command, wit_stdout};
use crate::common::file::{FileSpec, write_file};
use crate::common::tree_payload;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn unsorted_tree() -> Vec<u8> {
    tree_payload(&[
        ("100644", "test.txt", "1f7a7a472abf3dd9643fd615f6da379c4acb3e3a"),
        ("100644", "new.txt", "fa49b077972391ad58037050f2a75f74e3671e92"),
        ("40000", "bak", "d8329fc1cc938780ffdd9f94e0d364e0ea74f579"),
    ])
}

#[rstest]
fn hash_tree_in_canonical_order(repository_dir: TempDir) {
    write_file(FileSpec::new(
        repository_dir.path().join("tree.bin"),
        unsorted_tree(),
    ));

    let stdout = wit_stdout(
        repository_dir.path(),
        &["hash-object", "-t", "tree", "tree.bin"],
    );

    assert_eq!(stdout, "3c4e9cd789d88d8d89c1073707c3585e41b0e614\n");
}

#[rstest]
fn truncated_tree_is_rejected(repository_dir: TempDir) {
    let mut payload = unsorted_tree();
    payload.truncate(payload.len() - 5);
    write_file(FileSpec::new(repository_dir.path().join("tree.bin"), payload));

    run_wit_command(
        repository_dir.path(),
        &["hash-object", "-t", "tree", "tree.bin"],
    )
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("malformed object"));
}
