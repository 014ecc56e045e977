//! Profile lookup across the shared AWS config and credentials files.
use std::path::{Path, PathBuf};

use ini::{Ini, Properties};
use tracing::debug;

use crate::{
    lib::errors::{ProfileError, ProfileFileKind},
    settings::Settings,
};

const KEY_ROLE_ARN: &str = "role_arn";
const KEY_SOURCE_PROFILE: &str = "source_profile";
const KEY_REGION: &str = "region";
const PROFILE_SECTION_PREFIX: &str = "profile ";

/// Files searched for a profile, in order.
pub const LOOKUP_ORDER: [ProfileFileKind; 2] =
    [ProfileFileKind::Config, ProfileFileKind::Credentials];

/// Role-assumption parameters parsed from one INI section.
///
/// An empty string means the key was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileConfig {
    pub role_arn: String,
    pub source_profile: String,
    pub region: String,
}

impl ProfileConfig {
    /// True when both the role and the profile to assume it from are known.
    pub fn is_assumable(&self) -> bool {
        !self.role_arn.is_empty() && !self.source_profile.is_empty()
    }

    fn from_section(section: &Properties) -> Self {
        let value = |key: &str| section.get(key).unwrap_or_default().to_string();
        Self {
            role_arn: value(KEY_ROLE_ARN),
            source_profile: value(KEY_SOURCE_PROFILE),
            region: value(KEY_REGION),
        }
    }
}

/// Resolve `profile` from the shared config file, then from the shared
/// credentials file when the first did not yield an assumable role.
pub fn load_profile_config(
    settings: &Settings,
    profile: &str,
) -> Result<ProfileConfig, ProfileError> {
    let mut last = None;
    for kind in LOOKUP_ORDER {
        let result = load_from_file(settings, kind, profile);
        match &result {
            Ok(found) if found.is_assumable() => return result,
            Ok(_) => debug!(
                target: "getawslog::credentials",
                profile,
                file = %kind,
                "Profile has no assumable role"
            ),
            Err(err) => debug!(
                target: "getawslog::credentials",
                profile,
                file = %kind,
                reason = %err,
                "Profile lookup failed"
            ),
        }
        last = Some(result);
    }

    last.unwrap_or(Err(ProfileError::UnresolvablePath {
        kind: ProfileFileKind::Credentials,
    }))
}

fn load_from_file(
    settings: &Settings,
    kind: ProfileFileKind,
    profile: &str,
) -> Result<ProfileConfig, ProfileError> {
    let path =
        shared_file_path(settings, kind).ok_or(ProfileError::UnresolvablePath { kind })?;
    let document = Ini::load_from_file(&path).map_err(|source| ProfileError::Load {
        kind,
        path: path.clone(),
        source,
    })?;

    let mut found = find_profile(&document, profile, &path)?;
    if let Some(region) = settings.default_region.as_deref() {
        found.region = region.to_string();
    }
    Ok(found)
}

/// Look up a profile section by its bare name, then under the `profile ` prefix.
pub fn find_profile(
    document: &Ini,
    profile: &str,
    path: &Path,
) -> Result<ProfileConfig, ProfileError> {
    section_candidates(profile)
        .iter()
        .find_map(|name| document.section(Some(name.as_str())))
        .map(ProfileConfig::from_section)
        .ok_or_else(|| ProfileError::SectionNotFound {
            profile: profile.to_string(),
            path: path.to_path_buf(),
        })
}

fn section_candidates(profile: &str) -> [String; 2] {
    [
        profile.to_string(),
        format!("{PROFILE_SECTION_PREFIX}{profile}"),
    ]
}

fn shared_file_path(settings: &Settings, kind: ProfileFileKind) -> Option<PathBuf> {
    match kind {
        ProfileFileKind::Config => settings.config_path(),
        ProfileFileKind::Credentials => settings.credentials_path(),
    }
}
