use crate::common::command::{init_repository_dir, run_wit_command, wit_stdout};
use crate::common::file::write_generated_file;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(40)]
#[case(7)]
#[case(4)]
fn print_blob_by_abbreviated_id(init_repository_dir: TempDir, #[case] prefix_length: usize) {
    let file = write_generated_file(init_repository_dir.path());
    let file_name = file.path.file_name().unwrap().to_string_lossy().to_string();

    let oid = wit_stdout(
        init_repository_dir.path(),
        &["hash-object", "-w", &file_name],
    );

    run_wit_command(
        init_repository_dir.path(),
        &["cat-file", "blob", &oid.trim()[..prefix_length]],
    )
    .assert()
    .success()
    .stdout(file.content);
}
