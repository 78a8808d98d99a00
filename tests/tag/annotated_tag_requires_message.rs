use crate::common::command::{History, history, wit_tag};
use rstest::rstest;

#[rstest]
fn annotated_tag_requires_message(history: History) {
    wit_tag(history.dir.path(), &["-a", "v3"]).assert().failure();

    assert!(!history.dir.path().join(".git/refs/tags/v3").exists());
}
