#[path = "integration/common.rs"]
mod common;

#[path = "integration/cli_version.rs"]
mod cli_version;

#[path = "integration/startup_errors.rs"]
mod startup_errors;
