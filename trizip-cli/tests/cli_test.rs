//! End-to-end tests of the `trizip` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn trizip(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trizip"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_compress_then_decompress_every_method() {
    let dir = tempfile::tempdir().unwrap();
    let original = b"she sells sea shells by the sea shore ".repeat(20);

    for (method, tag) in [
        ("huffman", "_huf.opt_huf"),
        ("rle", "_rle.opt_rle"),
        ("lzw", "_lzw.opt_lzw"),
    ] {
        let work = dir.path().join(method);
        fs::create_dir(&work).unwrap();
        fs::write(work.join("shells.txt"), &original).unwrap();

        let out = trizip(&work, &["compress", "--method", method, "shells.txt"]);
        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
        let packed = format!("shells_txtY{tag}");
        assert!(work.join(&packed).exists());

        fs::remove_file(work.join("shells.txt")).unwrap();
        let out = trizip(&work, &["decompress", &packed]);
        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
        assert_eq!(fs::read(work.join("shells.txt")).unwrap(), original);
    }
}

#[test]
fn test_name_without_extension() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Makefile"), b"all:\n\techo hi\n").unwrap();

    let out = trizip(dir.path(), &["compress", "-m", "lzw", "--max-bits", "9", "Makefile"]);
    assert!(out.status.success());
    assert!(dir.path().join("MakefileN_lzw.opt_lzw").exists());

    let out = trizip(
        dir.path(),
        &["decompress", "-o", "restored", "MakefileN_lzw.opt_lzw"],
    );
    // The output directory must already exist.
    assert!(!out.status.success());

    fs::create_dir(dir.path().join("restored")).unwrap();
    let out = trizip(
        dir.path(),
        &["decompress", "-o", "restored", "MakefileN_lzw.opt_lzw"],
    );
    assert!(out.status.success());
    assert_eq!(
        fs::read(dir.path().join("restored/Makefile")).unwrap(),
        b"all:\n\techo hi\n"
    );
}

#[test]
fn test_corrupt_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad_binY_rle.opt_rle"), [0u8, 0]).unwrap();

    let out = trizip(dir.path(), &["decompress", "bad_binY_rle.opt_rle"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error:"));
    assert!(!dir.path().join("bad.bin").exists());
}

#[test]
fn test_existing_output_needs_force() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"aaaa").unwrap();

    assert!(trizip(dir.path(), &["compress", "-m", "rle", "a.txt"]).status.success());
    assert!(!trizip(dir.path(), &["compress", "-m", "rle", "a.txt"]).status.success());
    assert!(trizip(dir.path(), &["compress", "-m", "rle", "-f", "a.txt"]).status.success());
}

#[test]
fn test_test_command() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("data.bin"), (0..=255u8).cycle().take(3000).collect::<Vec<_>>())
        .unwrap();

    let out = trizip(dir.path(), &["test", "data.bin"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    for method in ["huffman", "rle", "lzw"] {
        assert!(stdout.contains(method), "{stdout}");
    }
    assert!(stdout.contains("All round trips OK"));
}

#[test]
fn test_codes_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ab.txt"), b"aab").unwrap();

    let out = trizip(dir.path(), &["codes", "--json", "ab.txt"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["distinct_symbols"], 2);
    assert_eq!(value["codes"].as_array().unwrap().len(), 2);
}
