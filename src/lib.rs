//! Resolves AWS credentials and a default region through an ordered fallback
//! chain: process environment, then the profile configuration files under
//! `~/.aws`, then the EC2 instance metadata service. The first source that
//! yields a usable value wins; nothing is cached between calls.

pub mod config;
pub mod credentials;
pub mod env;
pub mod error;
pub mod imds;
pub mod ini;
pub mod region;
pub mod value;

pub use config::active_profile;
pub use credentials::{resolve_credentials, CredentialResolver, Credentials};
pub use error::ResolveError;
pub use region::{resolve_region, RegionResolver};
