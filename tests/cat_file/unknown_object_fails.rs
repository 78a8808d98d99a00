use crate::common::command::{init_repository_dir, run_wit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn unknown_object_fails(init_repository_dir: TempDir) {
    run_wit_command(
        init_repository_dir.path(),
        &["cat-file", "blob", "d670460b4b4aece5915caf5c68d12f560a9fe3e4"],
    )
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("not found"));
}

#[rstest]
fn unknown_object_type_fails(init_repository_dir: TempDir) {
    run_wit_command(init_repository_dir.path(), &["cat-file", "note", "HEAD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown object type"));
}
