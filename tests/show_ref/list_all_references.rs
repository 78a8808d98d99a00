use crate::common::command::{History, history, wit_stdout, wit_tag};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_all_references(history: History) {
    wit_tag(history.dir.path(), &["v1.0", "HEAD~1"])
        .assert()
        .success();

    let expected = format!(
        "{} refs/heads/master\n{} refs/tags/v1.0\n",
        history.second, history.first
    );

    assert_eq!(wit_stdout(history.dir.path(), &["show-ref"]), expected);
}
