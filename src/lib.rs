//! Library crate root re-exporting the CLI, settings, credential, and log modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod credentials;
pub mod logs;
pub mod runtime;
pub mod settings;

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    #[test]
    fn credentials_layout_requires_split_modules() {
        let expected_files = [
            "src/credentials/mod.rs",
            "src/credentials/profile.rs",
            "src/credentials/session.rs",
        ];

        for path in expected_files {
            assert!(
                Path::new(path).exists(),
                "credentials layout: {} must exist",
                path
            );
        }

        let mod_path = Path::new("src/credentials/mod.rs");
        let content = fs::read_to_string(mod_path).unwrap_or_else(|_| {
            panic!(
                "credentials layout: failed to read {}",
                mod_path.display()
            )
        });

        for needle in ["resolve_session", "load_profile_config", "SessionBuilder"] {
            assert!(
                content.contains(needle),
                "credentials layout: mod.rs must re-export {}",
                needle
            );
        }
    }

    #[test]
    fn logs_layout_requires_split_modules() {
        let expected_files = [
            "src/logs/mod.rs",
            "src/logs/request.rs",
            "src/logs/source.rs",
            "src/logs/paginator.rs",
        ];

        for path in expected_files {
            assert!(Path::new(path).exists(), "logs layout: {} must exist", path);
        }

        let mod_path = Path::new("src/logs/mod.rs");
        let content = fs::read_to_string(mod_path)
            .unwrap_or_else(|_| panic!("logs layout: failed to read {}", mod_path.display()));

        for needle in ["stream_logs", "LogEventSource", "LogEventsRequest"] {
            assert!(
                content.contains(needle),
                "logs layout: mod.rs must re-export {}",
                needle
            );
        }
    }
}
