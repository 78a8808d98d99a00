use crate::common::command::{History, history, run_wit_command};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("HEAD")]
#[case("master")]
fn checkout_commit_into_empty_directory(
    history: History,
    #[case] revision: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(history.dir.path(), &["checkout", revision, "out"])
        .assert()
        .success();

    let out = history.dir.path().join("out");
    assert_eq!(std::fs::read_to_string(out.join("hello.txt"))?, "hello world\n");
    assert_eq!(std::fs::read_to_string(out.join("docs/guide.md"))?, "# Guide\n");

    Ok(())
}
