use crate::common::command::{History, history, wit_stdout, wit_tag};
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_lightweight_tag(history: History) -> Result<(), Box<dyn std::error::Error>> {
    let dir = history.dir.path();

    wit_tag(dir, &["v1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    wit_tag(dir, &["v0", &history.first]).assert().success();

    assert_eq!(
        std::fs::read_to_string(dir.join(".git/refs/tags/v1"))?,
        format!("{}\n", history.second)
    );
    assert_eq!(wit_stdout(dir, &["tag"]), "v0\nv1\n");

    Ok(())
}

#[rstest]
fn existing_tag_is_not_overwritten(history: History) -> Result<(), Box<dyn std::error::Error>> {
    let dir = history.dir.path();

    wit_tag(dir, &["v1"]).assert().success();
    wit_tag(dir, &["v1", "HEAD^"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        std::fs::read_to_string(dir.join(".git/refs/tags/v1"))?,
        format!("{}\n", history.second)
    );

    Ok(())
}
