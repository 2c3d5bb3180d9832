use std::process::Command;
use std::process::Output;

fn gendna(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gendna"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run gendna")
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_length_three() {
    let out = gendna(&["3"]);
    assert!(out.status.success());

    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], ">sequence 3");
    assert_eq!(lines[1].len(), 3);
    assert!(lines[1].chars().all(|c| matches!(c, 'a' | 'c' | 'g' | 't')));
}

#[test]
fn test_length_zero() {
    let out = gendna(&["0"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b">sequence 0\n\n");
}

#[test]
fn test_header_keeps_argument_text() {
    let out = gendna(&["05"]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines[0], ">sequence 05");
    assert_eq!(lines[1].len(), 5);

    let out = gendna(&[" 4 "]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines[0], ">sequence  4 ");
    assert_eq!(lines[1].len(), 4);
}

#[test]
fn test_negative_length_is_empty() {
    let out = gendna(&["-3"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b">sequence -3\n\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("negative length"));
}

#[test]
fn test_padded_negative_length_is_empty() {
    let out = gendna(&["-3 "]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b">sequence -3 \n\n");

    let out = gendna(&[" -3"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b">sequence  -3\n\n");
}

#[test]
fn test_flags_next_to_hyphen_lengths() {
    let out = gendna(&["-vv", "-3"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b">sequence -3\n\n");

    let out = gendna(&["--verbose", "6"]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines[0], ">sequence 6");
    assert!(String::from_utf8_lossy(&out.stderr).contains("Composition:"));
}

#[test]
fn test_non_numeric_fails() {
    let out = gendna(&["abc"]);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&out.stdout).contains(">sequence"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not an integer"));
}

#[test]
fn test_missing_argument_fails() {
    let out = gendna(&[]);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_surplus_argument_fails() {
    let out = gendna(&["3", "4"]);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let out = gendna(&["-v", "20"]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], ">sequence 20");
    assert!(String::from_utf8_lossy(&out.stderr).contains("Composition:"));
}

#[test]
fn test_large_length() {
    let out = gendna(&["100000"]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines[1].len(), 100_000);
    for c in ['a', 'c', 'g', 't'] {
        let f = lines[1].chars().filter(|&x| x == c).count() as f64 / 100_000.0;
        assert!((f - 0.25).abs() < 0.02, "{}: {:.4}", c, f);
    }
}
