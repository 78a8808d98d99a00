use crate::common::file::{FileSpec, write_file};
use crate::common::tree_payload;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR: &str = "Wit Tester <tester@example.com> 1700000000 +0000";

/// Two commits on `master` sharing a tree with `hello.txt` and `docs/guide.md`
pub struct History {
    pub dir: TempDir,
    pub hello: String,
    pub guide: String,
    pub docs: String,
    pub tree: String,
    pub first: String,
    pub second: String,
}

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_wit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

#[fixture]
pub fn history(init_repository_dir: TempDir) -> History {
    let dir = init_repository_dir;

    let hello = write_object(dir.path(), "blob", b"hello world\n");
    let guide = write_object(dir.path(), "blob", b"# Guide\n");
    let docs = write_object(
        dir.path(),
        "tree",
        &tree_payload(&[("100644", "guide.md", &guide)]),
    );
    let tree = write_object(
        dir.path(),
        "tree",
        &tree_payload(&[("40000", "docs", &docs), ("100644", "hello.txt", &hello)]),
    );

    let first = write_object(
        dir.path(),
        "commit",
        format!("tree {tree}\nauthor {AUTHOR}\ncommitter {AUTHOR}\n\nFirst commit\n").as_bytes(),
    );
    let second = write_object(
        dir.path(),
        "commit",
        format!(
            "tree {tree}\nparent {first}\nauthor {AUTHOR}\ncommitter {AUTHOR}\n\nSecond commit\n\nWith a body.\n"
        )
        .as_bytes(),
    );

    write_file(FileSpec::new(
        dir.path().join(".git/refs/heads/master"),
        format!("{second}\n").into_bytes(),
    ));

    History {
        dir,
        hello,
        guide,
        docs,
        tree,
        first,
        second,
    }
}

pub fn run_wit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("wit").expect("Failed to find wit binary");
    cmd.env_remove("WIT_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run a command that must succeed and return what it printed
pub fn wit_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_wit_command(dir, args).assert().success();

    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}

pub fn wit_tag(dir: &Path, args: &[&str]) -> Command {
    let mut args = args.to_vec();
    args.insert(0, "tag");

    let mut cmd = run_wit_command(dir, &args);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_AUTHOR_DATE", "2023-01-01 12:00:00 +0000"), // %Y-%m-%d %H:%M:%S %z
    ]);
    cmd
}

/// Store `payload` as an object of `object_type` and return its id
pub fn write_object(dir: &Path, object_type: &str, payload: &[u8]) -> String {
    let input = dir.join("object.in");
    write_file(FileSpec::new(input.clone(), payload.to_vec()));

    let oid = wit_stdout(dir, &["hash-object", "-w", "-t", object_type, "object.in"]);
    std::fs::remove_file(&input).expect("Failed to remove object input");

    oid.trim().to_string()
}
