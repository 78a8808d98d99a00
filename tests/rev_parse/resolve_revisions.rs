use crate::common::command::{History, history, run_wit_command, wit_stdout};
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("HEAD", false)]
#[case("@", false)]
#[case("master", false)]
#[case("refs/heads/master", false)]
#[case("HEAD^", true)]
#[case("HEAD~1", true)]
#[case("master~0", false)]
fn resolve_revisions(history: History, #[case] revision: &str, #[case] is_first: bool) {
    let expected = if is_first {
        &history.first
    } else {
        &history.second
    };

    assert_eq!(
        wit_stdout(history.dir.path(), &["rev-parse", revision]),
        format!("{expected}\n")
    );
}

#[rstest]
fn resolve_abbreviated_id(history: History) {
    assert_eq!(
        wit_stdout(history.dir.path(), &["rev-parse", &history.first[..10]]),
        format!("{}\n", history.first)
    );
}

#[rstest]
fn resolve_tree_of_commit(history: History) {
    assert_eq!(
        wit_stdout(history.dir.path(), &["rev-parse", "--type", "tree", "HEAD"]),
        format!("{}\n", history.tree)
    );
}

#[rstest]
fn unknown_revision_fails(history: History) {
    run_wit_command(history.dir.path(), &["rev-parse", "no-such-branch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[rstest]
fn parent_of_root_commit_fails(history: History) {
    run_wit_command(history.dir.path(), &["rev-parse", "HEAD~2"])
        .assert()
        .failure();
}
