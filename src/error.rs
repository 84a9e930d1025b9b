use std::{
  io,
  path::{Path, PathBuf},
};

use thiserror::Error;

/// Outcome taxonomy shared by every resolution source
///
/// The resolvers only distinguish these causes when reporting the final
/// error; while walking the chain, any local failure simply means "try the
/// next source".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
  /// A configured file path does not exist
  #[error("file not found: {}", .0.display())]
  NotFound(PathBuf),

  /// Every applicable source was consulted and none yielded a usable value
  #[error("no value found in any configured source")]
  Undefined,

  /// A source exists but could not be read
  #[error("malformed source: {0}")]
  Malformed(String),
}

impl ResolveError {
  /// Maps an IO failure on `path` into the taxonomy
  pub(crate) fn from_io(err: io::Error, path: &Path) -> Self {
    match err.kind() {
      io::ErrorKind::NotFound => ResolveError::NotFound(path.to_path_buf()),
      _ => ResolveError::Malformed(format!("{}: {err}", path.display())),
    }
  }
}
