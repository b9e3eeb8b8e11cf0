//! Client tuning knobs.

use crate::network::error::Error;
use heapless::String;
use serde::Deserialize;

/// Default number of connection attempts.
pub const CONNECT_ATTEMPTS: u8 = 5;
/// Default pause between connection attempts, in milliseconds.
pub const CONNECT_RETRY_DELAY_MS: u32 = 5000;
/// Default response read window, in milliseconds.
pub const RESPONSE_TIMEOUT_MS: u32 = 5000;
/// Default quiet period that ends a read under [`ReadPolicy::IdleGap`].
pub const IDLE_GAP_MS: u32 = 200;
/// Default `User-Agent` header value.
pub const USER_AGENT: &str = "Arduino UNO R4 WiFi";
/// Maximum length of the `User-Agent` value.
pub const MAX_USER_AGENT_LEN: usize = 64;

/// When a response read is considered complete.
///
/// Every policy is bounded by [`Config::response_timeout_ms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ReadPolicy {
    /// Stop at the first moment the socket has nothing buffered, once at least
    /// one byte was read. Responses that arrive in several packets with gaps
    /// between them come back truncated.
    #[default]
    FirstPause,
    /// Stop once at least one byte was read and nothing has arrived for
    /// [`Config::idle_gap_ms`].
    IdleGap,
    /// Stop once at least one byte was read and the peer has closed the
    /// connection with nothing left buffered.
    PeerClose,
}

/// Options for configuring the HTTP client.
///
/// Can be loaded from a JSON blob (for example a config page in flash) with
/// [`Config::from_json`]; absent fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many times `connect` tries before giving up. Zero behaves like one.
    pub connect_attempts: u8,
    /// Pause between failed connection attempts, in milliseconds.
    pub connect_retry_delay_ms: u32,
    /// Upper bound on a single `read_response` call, in milliseconds.
    pub response_timeout_ms: u32,
    /// Completion rule for `read_response`.
    pub read_policy: ReadPolicy,
    /// Quiet period used by [`ReadPolicy::IdleGap`], in milliseconds.
    pub idle_gap_ms: u32,
    /// Value of the `User-Agent` header.
    pub user_agent: String<MAX_USER_AGENT_LEN>,
    /// When false, every request carries `Connection: close`.
    pub keep_alive: bool,
}

impl Default for Config {
    fn default() -> Self {
        let mut user_agent = String::new();
        // USER_AGENT is shorter than MAX_USER_AGENT_LEN.
        let _ = user_agent.push_str(USER_AGENT);
        Self {
            connect_attempts: CONNECT_ATTEMPTS,
            connect_retry_delay_ms: CONNECT_RETRY_DELAY_MS,
            response_timeout_ms: RESPONSE_TIMEOUT_MS,
            read_policy: ReadPolicy::FirstPause,
            idle_gap_ms: IDLE_GAP_MS,
            user_agent,
            keep_alive: false,
        }
    }
}

impl Config {
    /// Parse a JSON object into a config.
    pub fn from_json(json: &[u8]) -> Result<Self, Error> {
        serde_json_core::from_slice::<Config>(json)
            .map(|(config, _)| config)
            .map_err(|_| Error::SerializeError)
    }

    pub(crate) fn attempts(&self) -> u8 {
        self.connect_attempts.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_board_constants() {
        let config = Config::default();
        assert_eq!(config.connect_attempts, 5);
        assert_eq!(config.connect_retry_delay_ms, 5000);
        assert_eq!(config.response_timeout_ms, 5000);
        assert_eq!(config.read_policy, ReadPolicy::FirstPause);
        assert_eq!(config.user_agent.as_str(), "Arduino UNO R4 WiFi");
        assert!(!config.keep_alive);
    }

    #[test]
    fn test_from_json_partial() {
        let json = br#"{"connect_attempts":2,"read_policy":"IdleGap","idle_gap_ms":50}"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.connect_attempts, 2);
        assert_eq!(config.read_policy, ReadPolicy::IdleGap);
        assert_eq!(config.idle_gap_ms, 50);
        assert_eq!(config.response_timeout_ms, RESPONSE_TIMEOUT_MS);
        assert_eq!(config.user_agent.as_str(), USER_AGENT);
    }

    #[test]
    fn test_from_json_user_agent() {
        let json = br#"{"user_agent":"weather-station/1.0","keep_alive":true}"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.user_agent.as_str(), "weather-station/1.0");
        assert!(config.keep_alive);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert_eq!(Config::from_json(b"not json"), Err(Error::SerializeError));
        assert_eq!(
            Config::from_json(br#"{"read_policy":"Forever"}"#),
            Err(Error::SerializeError)
        );
    }

    #[test]
    fn test_zero_attempts_means_one() {
        let config = Config {
            connect_attempts: 0,
            ..Config::default()
        };
        assert_eq!(config.attempts(), 1);
    }
}
