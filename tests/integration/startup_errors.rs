use crate::common::{isolated_command, run_isolated};

#[test]
fn malformed_start_time_fails_before_any_request() {
    let output = run_isolated(
        &["-g", "group", "-s", "stream"],
        &[("START_TIME", "2018-02-25 11:08")],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "no log lines may be written");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("START_TIME"), "stderr: {stderr}");
}

#[test]
fn inverted_time_range_fails() {
    let output = run_isolated(
        &["-g", "group", "-s", "stream"],
        &[
            ("START_TIME", "2018-02-26T00:00:00Z"),
            ("END_TIME", "2018-02-25T00:00:00Z"),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_log_group_fails() {
    let output = run_isolated(&["-s", "stream"], &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("log group"), "stderr: {stderr}");
}

#[cfg(unix)]
#[test]
fn unrelated_non_unicode_variable_is_ignored() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let output = isolated_command(&["-s", "stream"])
        .env("BAD", OsStr::from_bytes(b"\xff"))
        .output()
        .expect("getawslog should start");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
    assert!(stderr.contains("log group"), "stderr: {stderr}");
}

#[cfg(unix)]
#[test]
fn non_unicode_log_group_fails_at_startup() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let output = isolated_command(&["-s", "stream"])
        .env("LOG_GROUP", OsStr::from_bytes(b"\xff"))
        .output()
        .expect("getawslog should start");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("LOG_GROUP"), "stderr: {stderr}");
}
