//! End-to-end runs of the built binary.
use std::fs;
use std::process::{Command, Output};

fn sysfs_dump(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sysfs-dump"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_file_and_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good");
    fs::write(&good, b"x").unwrap();
    let good = good.to_str().unwrap();
    let missing = dir.path().join("missing");
    let missing = missing.to_str().unwrap();

    let out = sysfs_dump(&[missing, good]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains(&format!("'{missing}'\n")), "{stdout}");
    assert!(stdout.ends_with(&format!("{good}:x\n")), "{stdout}");
    assert!(out.stderr.is_empty());
}

#[test]
fn test_newline_flag_and_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty");
    fs::write(&empty, b"").unwrap();
    let empty = empty.to_str().unwrap();

    let out = sysfs_dump(&["-n", empty]);
    assert!(out.status.success());
    assert_eq!(out.stdout, format!("{empty}:\n").into_bytes());

    let out = sysfs_dump(&[empty]);
    assert!(out.status.success());
    assert_eq!(out.stdout, format!("{empty}:\n").into_bytes());
}

#[test]
fn test_directory_of_files_and_subdirectory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a"), b"x").unwrap();
    fs::write(dir.path().join("b"), b"y\n").unwrap();
    let root = dir.path().to_str().unwrap();

    let out = sysfs_dump(&[root]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains(&format!("{root}/a:x\n")), "{stdout}");
    assert!(stdout.contains(&format!("{root}/b:y\n")), "{stdout}");
    assert_eq!(stdout.len(), format!("{root}/a:x\n{root}/b:y\n").len());

    fs::create_dir(dir.path().join("sub")).unwrap();
    let out = sysfs_dump(&[root]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains(&format!("Is a directory: '{root}/sub'\n")), "{stdout}");
    assert!(stdout.contains(&format!("{root}/a:x\n")), "{stdout}");
}

#[test]
fn test_no_paths_is_usage_error() {
    let out = sysfs_dump(&[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}

#[test]
fn test_only_n_flag_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let f = dir.path().join("f");
    fs::write(&f, b"v\n").unwrap();
    let f = f.to_str().unwrap();

    let out = sysfs_dump(&["--debug", f]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn test_non_utf8_path_does_not_block_siblings() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join(OsStr::from_bytes(b"bad\xffname"));
    let good = dir.path().join("good");
    fs::write(&good, b"g").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_sysfs-dump"))
        .arg(&bad)
        .arg(&good)
        .output()
        .unwrap();

    // `bad` does not exist: it is reported, not rejected as a usage error.
    assert_eq!(out.status.code(), Some(1));
    let mut tail = good.as_os_str().as_bytes().to_vec();
    tail.extend_from_slice(b":g\n");
    assert!(out.stdout.ends_with(&tail));
    assert!(out.stderr.is_empty());
}

#[test]
fn test_repeat_runs_identical() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a"), b"1").unwrap();
    fs::write(dir.path().join("b"), b"2\n").unwrap();
    let root = dir.path().to_str().unwrap();
    assert_eq!(sysfs_dump(&["-n", root]).stdout, sysfs_dump(&["-n", root]).stdout);
}
