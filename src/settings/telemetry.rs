use tracing::{debug, info};

use super::Settings;

pub fn log_home_source(from_env: bool) {
    if from_env {
        debug!(target: "getawslog::settings", "Using HOME from environment");
    } else {
        debug!(
            target: "getawslog::settings",
            "HOME not set; falling back to the platform home directory"
        );
    }
}

pub fn log_loaded(settings: &Settings) {
    info!(
        target: "getawslog::settings",
        profile = settings.effective_profile(),
        home = ?settings.home,
        config_file = settings.config_file.as_deref().unwrap_or(""),
        credentials_file = settings.credentials_file.as_deref().unwrap_or(""),
        default_region = settings.default_region.as_deref().unwrap_or(""),
        print_time = settings.print_time,
        start_time = ?settings.start_time,
        end_time = ?settings.end_time,
        "Loaded settings"
    );
}
