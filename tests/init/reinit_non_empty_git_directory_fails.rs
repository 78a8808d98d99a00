use crate::common::command::{init_repository_dir, run_wit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reinit_non_empty_git_directory_fails(init_repository_dir: TempDir) {
    run_wit_command(init_repository_dir.path(), &["init"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not empty"));
}
