use crate::common::command::{History, history, wit_stdout};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_top_level_entries_of_head(history: History) {
    let expected = format!(
        "040000 tree {}\tdocs\n100644 blob {}\thello.txt\n",
        history.docs, history.hello
    );

    assert_eq!(wit_stdout(history.dir.path(), &["ls-tree", "HEAD"]), expected);
}

#[rstest]
fn list_all_blobs_recursively(history: History) {
    let expected = format!(
        "100644 blob {}\tdocs/guide.md\n100644 blob {}\thello.txt\n",
        history.guide, history.hello
    );

    assert_eq!(
        wit_stdout(history.dir.path(), &["ls-tree", "-r", &history.tree]),
        expected
    );
}
