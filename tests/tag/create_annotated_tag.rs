use crate::common::command::{History, history, wit_stdout, wit_tag};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_annotated_tag(history: History) {
    let dir = history.dir.path();

    wit_tag(dir, &["-a", "v2", "-m", "Release v2"])
        .assert()
        .success();

    let tag_oid = wit_stdout(dir, &["rev-parse", "v2"]);
    assert_ne!(tag_oid.trim(), history.second);

    let expected = format!(
        "object {}\ntype commit\ntag v2\ntagger fake_user <fake_email@email.com> 1672574400 +0000\n\nRelease v2\n",
        history.second
    );
    assert_eq!(wit_stdout(dir, &["cat-file", "tag", "v2"]), expected);

    // the tag peels to the commit and on to its tree
    assert_eq!(
        wit_stdout(dir, &["rev-parse", "--type", "commit", "v2"]),
        format!("{}\n", history.second)
    );
    assert_eq!(
        wit_stdout(dir, &["rev-parse", "--type", "tree", "v2"]),
        format!("{}\n", history.tree)
    );
}
