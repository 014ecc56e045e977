//! Credential resolution: shared-file profile lookup and layered sessions.

pub mod profile;
pub mod session;

pub use profile::{find_profile, load_profile_config, ProfileConfig, LOOKUP_ORDER};
pub use session::{
    resolve_session, AwsSessionBuilder, BaseCredentials, ResolvedSession, SessionBuilder,
    SessionKind, ROLE_SESSION_NAME,
};
