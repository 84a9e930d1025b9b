use tracing::debug;

use crate::{
  config::{active_profile, ConfigStore},
  env::{Environment, ProcessEnv},
  error::ResolveError,
  imds::MetadataClient,
  ini::Entry,
};

/// Walks the region sources in precedence order: environment variable,
/// config file, metadata service
pub struct RegionResolver<E> {
  env: E,
  store: ConfigStore<E>,
  imds: MetadataClient,
}

impl<E: Environment + Clone> RegionResolver<E> {
  pub fn new(env: E, imds: MetadataClient) -> Self {
    let store = ConfigStore::new(env.clone());
    RegionResolver { env, store, imds }
  }

  /// Resolve the region for the named profile
  ///
  /// `AWS_DEFAULT_REGION` is returned verbatim when set; otherwise the
  /// profile's `region` key; otherwise the region is derived from the
  /// instance's availability zone. Exhaustion is always
  /// [`ResolveError::Undefined`].
  pub fn resolve(&self, profile: &str) -> Result<String, ResolveError> {
    if let Some(region) = self.env.var("AWS_DEFAULT_REGION") {
      return Ok(region);
    }
    debug!("AWS_DEFAULT_REGION not set, checking config file");

    match self.store.config_profile(profile) {
      Ok(section) => {
        if let Some(region) = section.get("region").and_then(Entry::as_value) {
          return Ok(region.to_string());
        }
      }
      Err(err) => debug!("config file skipped for profile {profile}: {err}"),
    }

    debug!("no local region for profile {profile}, querying metadata service");
    self.imds.region()
  }
}

/// Resolve the region for the active profile against the process
/// environment, the config file, and the production metadata endpoint
pub fn resolve_region() -> Result<String, ResolveError> {
  let env = ProcessEnv;
  let profile = active_profile(&env);
  RegionResolver::new(env, MetadataClient::new()).resolve(&profile)
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use tempfile::NamedTempFile;

  use crate::env::StaticEnv;

  use super::*;

  const CLOSED_ENDPOINT: &str = "http://127.0.0.1:9";

  fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
  }

  fn resolver(env: StaticEnv) -> RegionResolver<StaticEnv> {
    RegionResolver::new(env, MetadataClient::with_endpoint(CLOSED_ENDPOINT))
  }

  #[test]
  fn it_prefers_the_environment_region() {
    let config = write_temp("[default]\nregion=ap-southeast-2\n");
    let env = StaticEnv::from_pairs([
      ("AWS_DEFAULT_REGION", "eu-west-1"),
      ("AWS_CONFIG_FILE", config.path().to_str().unwrap()),
    ]);

    assert_eq!(resolver(env).resolve("default").unwrap(), "eu-west-1");
  }

  #[test]
  fn it_reads_the_region_from_the_config_file() {
    let config = write_temp("[default]\nregion=ap-southeast-2\n");
    let env = StaticEnv::from_pairs([("AWS_CONFIG_FILE", config.path().to_str().unwrap())]);

    assert_eq!(resolver(env).resolve("default").unwrap(), "ap-southeast-2");
  }

  #[test]
  fn it_finds_the_region_under_a_prefixed_profile() {
    let config = write_temp("[profile work]\nregion=eu-central-1\n");
    let env = StaticEnv::from_pairs([("AWS_CONFIG_FILE", config.path().to_str().unwrap())]);

    assert_eq!(resolver(env).resolve("work").unwrap(), "eu-central-1");
  }

  #[test]
  fn it_reports_undefined_when_every_source_is_exhausted() {
    let dir = tempfile::tempdir().unwrap();
    let env = StaticEnv::from_pairs([("AWS_CONFIG_FILE", dir.path().join("config").to_str().unwrap())]);

    assert_eq!(resolver(env).resolve("default"), Err(ResolveError::Undefined));
  }
}
