//! Build-time configuration. Values are baked into the wasm bundle through
//! `option_env!`, e.g. `GAME_ROOM_API_BASE=/api trunk build`.

use std::time::Duration;
use tracing::warn;

pub const DEFAULT_LOBBY_ROUTE: &str = "/lobby";
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Route used by the leave / return-to-lobby actions.
    pub lobby_route: String,
    /// When set, records are fetched over HTTP instead of the built-in table.
    pub api_base: Option<String>,
    /// Artificial delay of the built-in table.
    pub mock_latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lobby_route: DEFAULT_LOBBY_ROUTE.to_string(),
            api_base: None,
            mock_latency: Duration::from_millis(DEFAULT_MOCK_LATENCY_MS),
        }
    }
}

impl Config {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("GAME_ROOM_API_BASE"),
            option_env!("GAME_ROOM_LOBBY_ROUTE"),
            option_env!("GAME_ROOM_MOCK_LATENCY_MS"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        lobby_route: Option<&str>,
        mock_latency_ms: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let mut config = Self {
            api_base: non_empty(api_base),
            ..Self::default()
        };
        if let Some(route) = non_empty(lobby_route) {
            config.lobby_route = route;
        }
        if let Some(raw) = non_empty(mock_latency_ms) {
            match raw.parse::<u64>() {
                Ok(ms) => config.mock_latency = Duration::from_millis(ms),
                Err(err) => warn!(value = %raw, error = %err, "ignoring bad mock latency"),
            }
        }
        config
    }
}
