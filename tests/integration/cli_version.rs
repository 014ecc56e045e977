use crate::common::run_isolated;

fn assert_banner(stdout: &str) {
    let line = stdout.trim_end();
    let (program, rest) = line.split_once(' ').expect("banner has a program name");
    assert!(program.starts_with("getawslog"), "banner: {line}");
    assert!(
        rest.starts_with(&format!("version {}, commit ", env!("CARGO_PKG_VERSION"))),
        "banner: {line}"
    );
    assert!(rest.contains(", built at "), "banner: {line}");
}

#[test]
fn long_version_flag_prints_banner_and_succeeds() {
    let output = run_isolated(&["--version"], &[]);
    assert!(output.status.success(), "status: {:?}", output.status);
    assert_banner(&String::from_utf8_lossy(&output.stdout));
}

#[test]
fn single_dash_version_prints_banner_and_succeeds() {
    let output = run_isolated(&["-version"], &[]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_banner(&String::from_utf8_lossy(&output.stdout));
}

#[test]
fn version_flag_ignores_malformed_environment() {
    let output = run_isolated(&["-v"], &[("START_TIME", "not-a-time")]);
    assert_eq!(output.status.code(), Some(0));
    assert_banner(&String::from_utf8_lossy(&output.stdout));
}

#[test]
fn help_lists_group_and_stream_flags() {
    let output = run_isolated(&["--help"], &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["-g", "--group", "-s", "--stream", "--print-time", "--version"] {
        assert!(stdout.contains(needle), "--help should list {needle}:\n{stdout}");
    }
}
