//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::{LaunchArgs, ParsedCommand};
pub use profile::{
    apply_overrides, build_launch_args, program_name, version_banner, LaunchProfile, BUILD_DATE,
    COMMIT, VERSION,
};
