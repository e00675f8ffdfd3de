//! Who is looking at which game. Resolved once at startup.

use tracing::warn;

pub const DEFAULT_GAME_ID: &str = "1";
pub const DEFAULT_USERNAME: &str = "Игрок";
pub const USERNAME_KEY: &str = "username";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub game_id: String,
    pub username: String,
}

impl Session {
    /// `search` is the raw location query string, with or without the leading `?`.
    pub fn resolve(search: &str, stored_username: Option<String>) -> Self {
        let game_id = query_param(search, "id")
            .or_else(|| query_param(search, "gameId"))
            .unwrap_or_else(|| DEFAULT_GAME_ID.to_string());
        let username = stored_username
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        Self { game_id, username }
    }

    pub fn from_browser() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::resolve(&search, stored_username())
    }
}

/// Stored by the login page as a plain string, not JSON. Blocked or missing
/// storage reads as no name.
fn stored_username() -> Option<String> {
    let win = web_sys::window()?;
    let store = match win.local_storage() {
        Ok(Some(store)) => store,
        Ok(None) => return None,
        Err(err) => {
            warn!(?err, "local storage unavailable");
            return None;
        }
    };
    match store.get_item(USERNAME_KEY) {
        Ok(name) => name,
        Err(err) => {
            warn!(?err, "could not read stored username");
            None
        }
    }
}

/// First non-empty value of `key`, like `URLSearchParams.get`.
fn query_param(search: &str, key: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(query) {
        Ok(pairs) => pairs,
        Err(err) => {
            warn!(error = %err, "unreadable query string");
            return None;
        }
    };
    pairs
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
}
