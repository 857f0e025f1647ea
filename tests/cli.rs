use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_binary(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_parsedate"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_prints_timestamp() {
    let output = run_binary("2021-06-15 13:45:30 +0000\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1623764730\n");
}

#[test]
fn test_bad_input_fails_with_diagnostic() {
    let output = run_binary("not-a-date\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not-a-date"), "stderr: {stderr}");
}

#[test]
fn test_empty_stdin_fails() {
    let output = run_binary("");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No input line"));
}
