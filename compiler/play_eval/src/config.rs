//! Runtime configuration.
//!
//! Settings are plain data handed to [`PlayerBuilder::config`](crate::PlayerBuilder::config).
//! Hosts that want environment overrides call [`PlayConfig::from_env`]:
//!
//! | Variable              | Field            | Notes                  |
//! |-----------------------|------------------|------------------------|
//! | `PLAY_POOL_CAPACITY`  | `pool_capacity`  |                        |
//! | `PLAY_MAX_CALL_DEPTH` | `max_call_depth` | `0` removes the limit  |

/// Idle environments kept by default.
pub const DEFAULT_POOL_CAPACITY: usize = 64;

/// Default bound on nested function calls per invocation.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Environment variable overriding [`PlayConfig::pool_capacity`].
pub const POOL_CAPACITY_VAR: &str = "PLAY_POOL_CAPACITY";

/// Environment variable overriding [`PlayConfig::max_call_depth`].
pub const MAX_CALL_DEPTH_VAR: &str = "PLAY_MAX_CALL_DEPTH";

/// A configuration value that could not be used.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: expected a non-negative integer")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

/// Tunables of a [`Player`](crate::Player).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayConfig {
    /// Maximum idle environments kept for reuse.
    pub pool_capacity: usize,
    /// Maximum nested function calls; `None` relies on stack growth alone.
    pub max_call_depth: Option<usize>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            pool_capacity: DEFAULT_POOL_CAPACITY,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

impl PlayConfig {
    /// Defaults overridden by the process environment.
    ///
    /// Malformed values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |var: &'static str| {
            let raw = lookup(var)?;
            parse_count(var, &raw)
                .map_err(|err| tracing::warn!(%err, "ignoring configuration override"))
                .ok()
        };
        let mut config = PlayConfig::default();
        if let Some(n) = read(POOL_CAPACITY_VAR) {
            config.pool_capacity = n;
        }
        if let Some(n) = read(MAX_CALL_DEPTH_VAR) {
            config.max_call_depth = (n > 0).then_some(n);
        }
        config
    }

    #[must_use]
    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }
}

fn parse_count(var: &'static str, raw: &str) -> Result<usize, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError {
        var,
        value: raw.to_string(),
    })
}
