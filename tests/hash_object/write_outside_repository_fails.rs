use crate::common::command::{repository_dir, run_wit_command};
use crate::common::file::write_generated_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn write_outside_repository_fails(repository_dir: TempDir) {
    let file = write_generated_file(repository_dir.path());
    let file_name = file.path.file_name().unwrap().to_string_lossy().to_string();

    run_wit_command(repository_dir.path(), &["hash-object", "-w", &file_name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git repository"));
}
