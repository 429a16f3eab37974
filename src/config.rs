//! Session configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
pub const DEFAULT_SIGNUP_DELAY_MS: u64 = 1200;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;
pub const DEFAULT_STORAGE_KEY: &str = "authToken";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Simulated network latency before a login resolves.
    pub login_delay: Duration,
    /// Simulated network latency before a signup resolves.
    pub signup_delay: Duration,
    pub token_ttl: Duration,
    /// Key the current session token is stored under.
    pub storage_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
            signup_delay: Duration::from_millis(DEFAULT_SIGNUP_DELAY_MS),
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

impl AuthConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `AUTH_LOGIN_DELAY_MS`: default 1000
    /// - `AUTH_SIGNUP_DELAY_MS`: default 1200
    /// - `AUTH_TOKEN_TTL_SECS`: default 86400
    /// - `AUTH_STORAGE_KEY`: default `authToken`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source. Unparseable or blank
    /// values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_key = lookup("AUTH_STORAGE_KEY")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_owned());

        Self {
            login_delay: Duration::from_millis(parse_or(&lookup, "AUTH_LOGIN_DELAY_MS", DEFAULT_LOGIN_DELAY_MS)),
            signup_delay: Duration::from_millis(parse_or(&lookup, "AUTH_SIGNUP_DELAY_MS", DEFAULT_SIGNUP_DELAY_MS)),
            token_ttl: Duration::from_secs(parse_or(&lookup, "AUTH_TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)),
            storage_key,
        }
    }

    /// Same config with both simulated delays removed.
    #[must_use]
    pub fn without_delays(mut self) -> Self {
        self.login_delay = Duration::ZERO;
        self.signup_delay = Duration::ZERO;
        self
    }

    /// Token lifetime as a signed `time::Duration`.
    #[must_use]
    pub fn token_ttl_signed(&self) -> time::Duration {
        time::Duration::try_from(self.token_ttl).unwrap_or(time::Duration::MAX)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
