use crate::common::command::{History, history, run_wit_command};
use crate::common::tree_payload;
use rstest::rstest;

#[rstest]
fn print_tree_of_commit(history: History) {
    let expected = tree_payload(&[
        ("40000", "docs", &history.docs),
        ("100644", "hello.txt", &history.hello),
    ]);

    run_wit_command(history.dir.path(), &["cat-file", "tree", "HEAD"])
        .assert()
        .success()
        .stdout(expected);
}
