use crate::common::command::{AUTHOR, History, history, run_wit_command};
use rstest::rstest;

#[rstest]
fn print_mismatched_kind_as_stored(history: History) {
    // a commit cannot be peeled to a blob, so its own payload is printed
    let expected = format!(
        "tree {}\nparent {}\nauthor {AUTHOR}\ncommitter {AUTHOR}\n\nSecond commit\n\nWith a body.\n",
        history.tree, history.first
    );

    run_wit_command(history.dir.path(), &["cat-file", "blob", "HEAD"])
        .assert()
        .success()
        .stdout(expected);
}
