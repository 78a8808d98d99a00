use crate::common::command::{repository_dir, wit_stdout};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn hash_blob_without_repository(repository_dir: TempDir) {
    write_file(FileSpec::new(
        repository_dir.path().join("test.txt"),
        b"test content\n".to_vec(),
    ));

    let stdout = wit_stdout(repository_dir.path(), &["hash-object", "test.txt"]);

    assert_eq!(stdout, "d670460b4b4aece5915caf5c68d12f560a9fe3e4\n");
    assert!(!repository_dir.path().join(".git").exists());
}
