use crate::common::command::{History, history, init_repository_dir, run_wit_command, wit_stdout};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_history_as_graphviz(history: History) {
    let (first, second) = (&history.first, &history.second);
    let expected = format!(
        "digraph witlog{{\n  node[shape=rect]\n  c_{second} [label=\"{}: Second commit\"]\n  c_{second} -> c_{first};\n  c_{first} [label=\"{}: First commit\"]\n}}\n",
        &second[..8],
        &first[..8]
    );

    assert_eq!(wit_stdout(history.dir.path(), &["log"]), expected);
}

#[rstest]
fn log_from_first_commit(history: History) {
    let stdout = wit_stdout(history.dir.path(), &["log", "HEAD~1"]);

    assert!(stdout.contains(&format!("c_{}", history.first)));
    assert!(!stdout.contains(&format!("c_{}", history.second)));
}

#[rstest]
fn log_with_no_commits_fails(init_repository_dir: TempDir) {
    run_wit_command(init_repository_dir.path(), &["log"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
