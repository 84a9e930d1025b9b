use std::{collections::HashMap, env};

/// Environment lookup used by the resolvers
///
/// The resolvers take the environment as a value rather than reading the
/// process globals directly, so tests can substitute a fixed set of variables
/// without mutating process state.
pub trait Environment {
  /// The variable's value, or `None` when it is not set
  fn var(&self, name: &str) -> Option<String>;
}

/// Reads from the real process environment
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
  fn var(&self, name: &str) -> Option<String> {
    env::var(name).ok()
  }
}

/// A fixed set of variables
///
/// Used by tests, and by callers that resolve against an environment other
/// than the current process's.
#[derive(Clone, Debug, Default)]
pub struct StaticEnv {
  vars: HashMap<String, String>,
}

impl StaticEnv {
  pub fn from_pairs<I, K, V>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    StaticEnv {
      vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
    }
  }
}

impl Environment for StaticEnv {
  fn var(&self, name: &str) -> Option<String> {
    self.vars.get(name).cloned()
  }
}
