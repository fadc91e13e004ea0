//! The binary's non-interactive flags.

use std::process::Command;

fn run(arg: &str) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg(arg)
        .output()
        .expect("Failed to execute binary");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

#[test]
fn test_version_flag() {
    let (ok, stdout) = run("--version");
    assert!(ok, "Version flag should exit with code 0");
    assert_eq!(stdout.trim(), format!("folio {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag_lists_options() {
    let (ok, stdout) = run("--help");
    assert!(ok);
    for flag in ["--print", "--json", "--no-animation", "--version"] {
        assert!(stdout.contains(flag), "help should mention {}", flag);
    }
}

#[test]
fn test_print_flag_writes_resume() {
    let (ok, stdout) = run("--print");
    assert!(ok);
    assert!(stdout.starts_with("SUJAL KAMANNA"));
    assert!(stdout.contains("CERTIFICATIONS"));
}

#[test]
fn test_json_flag_writes_valid_json() {
    let (ok, stdout) = run("--json");
    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert!(value["skills"].is_array());
    assert_eq!(value["certifications"].as_array().unwrap().len(), 10);
}
