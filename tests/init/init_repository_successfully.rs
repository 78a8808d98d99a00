use crate::common::command::{repository_dir, run_wit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let target = repository_dir.path().join("project");
    let git_path = target.join(".git");

    run_wit_command(repository_dir.path(), &["init", "project"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty Git repository in .+/\n$",
        )?)
        .stdout(predicate::str::contains(
            git_path.canonicalize()?.display().to_string(),
        ));

    for sub_dir in ["branches", "objects", "refs/heads", "refs/tags"] {
        assert!(git_path.join(sub_dir).is_dir(), "missing {sub_dir}");
    }
    assert_eq!(
        std::fs::read_to_string(git_path.join("HEAD"))?,
        "ref: refs/heads/master\n"
    );
    assert!(std::fs::read_to_string(git_path.join("config"))?
        .contains("repositoryformatversion = 0"));

    Ok(())
}
