use crate::common::command::{init_repository_dir, run_wit_command, wit_stdout};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use flate2::read::ZlibDecoder;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::Read;

#[rstest]
fn write_blob_object_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let sub_dir = init_repository_dir.path().join("nested");
    write_file(FileSpec::new(
        sub_dir.join("test.txt"),
        b"test content\n".to_vec(),
    ));

    // discovered from a subdirectory of the working tree
    let stdout = wit_stdout(&sub_dir, &["hash-object", "-w", "test.txt"]);
    assert_eq!(stdout, "d670460b4b4aece5915caf5c68d12f560a9fe3e4\n");

    let object_path = init_repository_dir
        .path()
        .join(".git/objects/d6/70460b4b4aece5915caf5c68d12f560a9fe3e4");
    let mut framed = Vec::new();
    ZlibDecoder::new(std::fs::File::open(object_path)?).read_to_end(&mut framed)?;
    assert_eq!(framed, b"blob 13\0test content\n".to_vec());

    // writing the same content again leaves the store as it was
    run_wit_command(&sub_dir, &["hash-object", "-w", "test.txt"])
        .assert()
        .success()
        .stdout("d670460b4b4aece5915caf5c68d12f560a9fe3e4\n");

    Ok(())
}
