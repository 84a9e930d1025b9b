use std::path::PathBuf;

use tracing::debug;

use crate::{
  env::Environment,
  error::ResolveError,
  ini::{self, Section, Settings},
};

/// Profile used when `AWS_DEFAULT_PROFILE` is not set
pub const DEFAULT_PROFILE: &str = "default";

/// The active profile name: `AWS_DEFAULT_PROFILE` when set and non-empty,
/// otherwise `default`
pub fn active_profile<E: Environment>(env: &E) -> String {
  match env.var("AWS_DEFAULT_PROFILE") {
    Some(name) if !name.is_empty() => name,
    _ => DEFAULT_PROFILE.to_owned(),
  }
}

/// Locates and reads the AWS config and shared-credentials files
///
/// Files are read at the moment a profile is requested; nothing is cached
/// between calls, so concurrent resolutions never share state.
#[derive(Clone, Debug)]
pub struct ConfigStore<E> {
  env: E,
}

impl<E: Environment> ConfigStore<E> {
  pub fn new(env: E) -> Self {
    ConfigStore { env }
  }

  /// `HOME`, or the working directory when unset
  fn home_dir(&self) -> PathBuf {
    match self.env.var("HOME") {
      Some(home) if !home.is_empty() => PathBuf::from(home),
      _ => PathBuf::from("."),
    }
  }

  /// Config file: `AWS_CONFIG_FILE`, or `<home>/.aws/config`
  pub fn config_file_path(&self) -> PathBuf {
    match self.env.var("AWS_CONFIG_FILE") {
      Some(path) if !path.is_empty() => PathBuf::from(path),
      _ => self.home_dir().join(".aws").join("config"),
    }
  }

  /// Shared-credentials file: `AWS_SHARED_CREDENTIALS_FILE`, or
  /// `<home>/.aws/credentials`
  pub fn credentials_file_path(&self) -> PathBuf {
    match self.env.var("AWS_SHARED_CREDENTIALS_FILE") {
      Some(path) if !path.is_empty() => PathBuf::from(path),
      _ => self.home_dir().join(".aws").join("credentials"),
    }
  }

  /// Profile-scoped settings from the config file
  pub fn config_profile(&self, profile: &str) -> Result<Section, ResolveError> {
    profile_section(ini::load(self.config_file_path())?, profile)
  }

  /// Profile-scoped settings from the shared-credentials file
  pub fn credentials_profile(&self, profile: &str) -> Result<Section, ResolveError> {
    profile_section(ini::load(self.credentials_file_path())?, profile)
  }
}

/// Section lookup across the two section-name forms
///
/// The credentials file names sections after the bare profile; the config
/// file prefixes non-default profiles with `profile `. Both candidates are
/// tried in that order. A file that parses but carries neither form is
/// `Undefined`, not `NotFound` - the file exists, the profile does not.
fn profile_section(mut settings: Settings, profile: &str) -> Result<Section, ResolveError> {
  let candidates = [profile.to_owned(), format!("profile {profile}")];
  for candidate in candidates {
    if let Some(section) = settings.remove(&candidate) {
      return Ok(section);
    }
  }
  debug!("profile {profile} not present in parsed settings");
  Err(ResolveError::Undefined)
}
