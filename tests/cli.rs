use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seqzip"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("run seqzip")
}

fn seqzip(args: &[&str], dir: &Path) -> bool {
    run(args, dir).status.success()
}

#[test]
fn bwt_compress_and_back() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("reads.txt"), "GATTACAGATTACANNACGT\n").unwrap();

    assert!(seqzip(&["compress-bwt", "reads.txt"], dir.path()));
    let artifact = fs::read_to_string(dir.path().join("reads_bwt_compressed.txt")).unwrap();
    assert!(artifact.starts_with('{'));
    assert!(artifact.contains("\"add\""));

    assert!(seqzip(&["decompress-invert", "reads_bwt_compressed.txt"], dir.path()));
    let restored =
        fs::read_to_string(dir.path().join("reads_bwt_compressed_decompressed_original.txt"))
            .unwrap();
    assert_eq!(restored, "GATTACAGATTACANNACGT");
}

#[test]
fn transform_and_invert_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("s.txt"), "acgt").unwrap();

    assert!(seqzip(&["transform", "s.txt"], dir.path()));
    assert_eq!(fs::read_to_string(dir.path().join("s_bwt.txt")).unwrap(), "T$ACG");

    assert!(seqzip(&["invert", "--inverse", "last-to-first", "s_bwt.txt"], dir.path()));
    assert_eq!(
        fs::read_to_string(dir.path().join("s_bwt_inversion.txt")).unwrap(),
        "ACGT"
    );
}

#[test]
fn plain_compress_and_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("p.txt"), "AAAACCGT").unwrap();

    assert!(seqzip(&["compress", "p.txt"], dir.path()));
    assert_eq!(run(&["compress", "p.txt"], dir.path()).status.code(), Some(1));
    assert!(seqzip(&["compress", "--force", "p.txt"], dir.path()));

    assert!(seqzip(&["decompress", "p_compressed.txt"], dir.path()));
    assert_eq!(
        fs::read_to_string(dir.path().join("p_compressed_decompressed.txt")).unwrap(),
        "AAAACCGT"
    );
}

#[test]
fn rejects_foreign_symbols() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("x.txt"), "ACGTX").unwrap();
    let out = run(&["compress", "x.txt"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("'X' at position 4"), "{}", stderr);
    assert!(!stderr.contains("panicked"), "{}", stderr);
    assert!(!dir.path().join("x_compressed.txt").exists());
}

#[test]
fn existing_output_is_an_error_not_a_crash() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("e.txt"), "ACGT").unwrap();
    assert_eq!(run(&["transform", "e.txt"], dir.path()).status.code(), Some(0));
    let out = run(&["transform", "e.txt"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&out.stderr).contains("panicked"));
}

#[test]
fn bad_alphabet_flag_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "ACGT").unwrap();
    let out = run(&["--alphabet", "AC$", "compress", "a.txt"], dir.path());
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid alphabet"));
}
