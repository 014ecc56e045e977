//! Ambient and assume-role session construction.
use std::path::PathBuf;

use async_trait::async_trait;
use aws_config::{
    profile::ProfileFileCredentialsProvider, sts::AssumeRoleProvider, BehaviorVersion, Region,
    SdkConfig,
};
use aws_runtime::env_config::file::{EnvConfigFileKind, EnvConfigFiles};
use tracing::{debug, info};

use super::profile::{load_profile_config, ProfileConfig};
use crate::settings::Settings;

/// Session name reported to STS for assumed-role calls.
pub const ROLE_SESSION_NAME: &str = "getawslog";

/// Static credentials that authenticate the role assumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseCredentials {
    /// Shared credentials file; `None` leaves the SDK default location in place.
    pub credentials_file: Option<PathBuf>,
    pub profile: String,
}

/// How the returned session obtains its credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Ambient,
    AssumedRole,
}

impl SessionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Ambient => "ambient",
            SessionKind::AssumedRole => "assumed_role",
        }
    }
}

/// Session produced by [`resolve_session`] together with how it was built.
#[derive(Debug, Clone)]
pub struct ResolvedSession<S> {
    pub session: S,
    pub kind: SessionKind,
    pub profile: String,
}

/// Factory for the two session shapes the resolver can return.
#[async_trait]
pub trait SessionBuilder {
    type Session: Send;

    /// Session backed by the hosting environment's default credential chain.
    async fn ambient(&self) -> Self::Session;

    /// Session whose credentials come from assuming `role_arn` with `base`.
    async fn layered(
        &self,
        base: BaseCredentials,
        role_arn: &str,
        region: Option<&str>,
    ) -> Self::Session;
}

/// Builds AWS SDK configurations.
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsSessionBuilder;

#[async_trait]
impl SessionBuilder for AwsSessionBuilder {
    type Session = SdkConfig;

    async fn ambient(&self) -> SdkConfig {
        aws_config::defaults(BehaviorVersion::latest()).load().await
    }

    async fn layered(
        &self,
        base: BaseCredentials,
        role_arn: &str,
        region: Option<&str>,
    ) -> SdkConfig {
        let mut shared = ProfileFileCredentialsProvider::builder().profile_name(&base.profile);
        if let Some(path) = base.credentials_file {
            shared = shared.profile_files(
                EnvConfigFiles::builder()
                    .with_file(EnvConfigFileKind::Credentials, path)
                    .build(),
            );
        }
        let base_config = aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(shared.build())
            .load()
            .await;

        let mut assume = AssumeRoleProvider::builder(role_arn)
            .session_name(ROLE_SESSION_NAME)
            .configure(&base_config);
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            assume = assume.region(Region::new(region.to_string()));
            loader = loader.region(Region::new(region.to_string()));
        }

        loader
            .credentials_provider(assume.build().await)
            .load()
            .await
    }
}

/// Resolve the session for the effective profile.
///
/// Profile resolution failures are not fatal: they are logged and the
/// ambient session is returned instead.
pub async fn resolve_session<B>(settings: &Settings, builder: &B) -> ResolvedSession<B::Session>
where
    B: SessionBuilder + Sync,
{
    let profile = settings.effective_profile().to_string();
    let found = match load_profile_config(settings, &profile) {
        Ok(found) => found,
        Err(err) => {
            info!(
                target: "getawslog::credentials",
                profile = %profile,
                reason = %err,
                "No layered profile available; using ambient credentials"
            );
            ProfileConfig::default()
        }
    };

    if !found.is_assumable() {
        debug!(
            target: "getawslog::credentials",
            profile = %profile,
            "Profile does not assume a role; using ambient credentials"
        );
        return ResolvedSession {
            session: builder.ambient().await,
            kind: SessionKind::Ambient,
            profile,
        };
    }

    info!(
        target: "getawslog::credentials",
        profile = %profile,
        role_arn = %found.role_arn,
        source_profile = %found.source_profile,
        region = %found.region,
        "Assuming role from profile"
    );
    let base = BaseCredentials {
        credentials_file: settings.credentials_path(),
        profile: found.source_profile.clone(),
    };
    let region = Some(found.region.as_str()).filter(|region| !region.is_empty());
    ResolvedSession {
        session: builder.layered(base, &found.role_arn, region).await,
        kind: SessionKind::AssumedRole,
        profile,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Default)]
    struct RecordingBuilder {
        layered_calls: Mutex<Vec<(BaseCredentials, String, Option<String>)>>,
    }

    #[async_trait]
    impl SessionBuilder for RecordingBuilder {
        type Session = &'static str;

        async fn ambient(&self) -> &'static str {
            "ambient"
        }

        async fn layered(
            &self,
            base: BaseCredentials,
            role_arn: &str,
            region: Option<&str>,
        ) -> &'static str {
            self.layered_calls.lock().expect("lock").push((
                base,
                role_arn.to_string(),
                region.map(String::from),
            ));
            "layered"
        }
    }

    fn fixture_home(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    fn settings(home: &str, profile: &str) -> Settings {
        Settings {
            home: Some(fixture_home(home)),
            profile: Some(profile.to_string()),
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn assumable_profile_builds_layered_session() {
        let builder = RecordingBuilder::default();
        let resolved = resolve_session(&settings("home_a", "testprof"), &builder).await;

        assert_eq!(resolved.session, "layered");
        assert_eq!(resolved.kind, SessionKind::AssumedRole);
        assert_eq!(resolved.profile, "testprof");

        let calls = builder.layered_calls.lock().expect("lock");
        let (base, role_arn, region) = &calls[0];
        assert_eq!(base.profile, "srcprof");
        assert_eq!(
            base.credentials_file,
            Some(fixture_home("home_a").join(".aws/credentials"))
        );
        assert_eq!(role_arn, "arn:aws:iam::123456789012:role/Admin");
        assert_eq!(region.as_deref(), Some("ap-northeast-1"));
    }

    #[tokio::test]
    async fn missing_profile_falls_back_to_ambient() {
        let builder = RecordingBuilder::default();
        let resolved = resolve_session(&settings("home_b", "none"), &builder).await;

        assert_eq!(resolved.session, "ambient");
        assert_eq!(resolved.kind, SessionKind::Ambient);
        assert!(builder.layered_calls.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn unresolvable_files_fall_back_to_ambient() {
        let builder = RecordingBuilder::default();
        let resolved = resolve_session(&Settings::default(), &builder).await;

        assert_eq!(resolved.kind, SessionKind::Ambient);
        assert_eq!(resolved.profile, "default");
    }

    #[tokio::test]
    async fn profile_without_role_uses_ambient() {
        let builder = RecordingBuilder::default();
        let resolved = resolve_session(&settings("home_a", "default"), &builder).await;

        assert_eq!(resolved.kind, SessionKind::Ambient);
    }

    #[tokio::test]
    async fn source_profile_without_role_uses_ambient() {
        let temp = tempfile::tempdir().expect("can create temporary directory");
        let config = temp.path().join("config");
        let credentials = temp.path().join("credentials");
        std::fs::write(
            &config,
            "[profile sourceonly]\nsource_profile = base\nregion = eu-west-1\n",
        )
        .expect("can write config");
        std::fs::write(&credentials, "[base]\naws_access_key_id = AKIDEXAMPLE\n")
            .expect("can write credentials");

        let settings = Settings {
            config_file: Some(config.display().to_string()),
            credentials_file: Some(credentials.display().to_string()),
            profile: Some("sourceonly".into()),
            ..Settings::default()
        };
        let builder = RecordingBuilder::default();
        let resolved = resolve_session(&settings, &builder).await;

        assert_eq!(resolved.kind, SessionKind::Ambient);
        assert_eq!(resolved.session, "ambient");
        assert!(builder.layered_calls.lock().expect("lock").is_empty());
    }
}
