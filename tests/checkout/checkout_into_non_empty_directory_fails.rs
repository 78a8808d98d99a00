use crate::common::command::{History, history, run_wit_command};
use crate::common::file::write_generated_file;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_into_non_empty_directory_fails(history: History) {
    let out = history.dir.path().join("out");
    let existing = write_generated_file(&out);

    run_wit_command(history.dir.path(), &["checkout", "HEAD", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not empty"));

    assert!(existing.path.is_file());
    assert!(!out.join("hello.txt").exists());
}
