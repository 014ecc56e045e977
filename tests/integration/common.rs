use std::{
    path::PathBuf,
    process::{Command, Output},
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_getawslog");

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

/// Binary command with a cleared environment and the `home_a` fixture as `HOME`.
pub fn isolated_command(args: &[&str]) -> Command {
    let mut command = Command::new(BINARY_PATH);
    command
        .env_clear()
        .env("HOME", fixture("tests/fixtures/home_a"))
        .args(args);
    command
}

/// Run the binary with a cleared environment plus `envs`.
pub fn run_isolated(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut command = isolated_command(args);
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("getawslog should start")
}
