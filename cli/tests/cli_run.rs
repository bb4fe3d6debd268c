//! Runs the `replica` binary end to end in an isolated directory (no `.env`, empty XDG home).

use std::process::{Command, Output};

fn run_replica(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_replica"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("REPLICA_COUNT")
        .env_remove("REPLICA_STRATEGY")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run replica binary")
}

fn workdir_with_prototype(body: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("proto.toml"), body).unwrap();
    dir
}

#[test]
fn cli_help_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_replica(dir.path(), &["--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Replica"));
    assert!(stdout.contains("--strategy"));
}

#[test]
fn cli_prints_one_line_per_copy() {
    let dir = workdir_with_prototype("value = 42\n");
    let out = run_replica(dir.path(), &["--prototype", "proto.toml", "-n", "3"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec![r#"{"value":42}"#; 3]);
}

#[test]
fn cli_count_from_dotenv() {
    let dir = workdir_with_prototype("value = 1\n");
    std::fs::write(dir.path().join(".env"), "REPLICA_COUNT=2\n").unwrap();
    let out = run_replica(dir.path(), &["--prototype", "proto.toml"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).lines().count(), 2);
}

#[test]
fn cli_missing_prototype_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_replica(dir.path(), &["--prototype", "absent.toml"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("read prototype"), "{stderr}");
}
