use super::GameSource;
use crate::error::SourceError;
use crate::model::GameRecord;
use async_trait::async_trait;
use gloo_net::http::Request;
use tracing::debug;

/// Fetches `GET {base}/games/{id}` and decodes the same JSON shape the
/// built-in table uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpGameSource {
    base_url: String,
}

impl HttpGameSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn game_url(&self, game_id: &str) -> String {
        let id = String::from(js_sys::encode_uri_component(game_id));
        format!("{}/games/{}", self.base_url, id)
    }
}

#[async_trait(?Send)]
impl GameSource for HttpGameSource {
    async fn fetch_game(&self, game_id: &str) -> Result<GameRecord, SourceError> {
        let url = self.game_url(game_id);
        debug!(%url, "requesting game record");
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        decode_game(status, &body)
    }
}

fn decode_game(status: u16, body: &str) -> Result<GameRecord, SourceError> {
    match status {
        404 => return Err(SourceError::NotFound),
        200..=299 => {}
        other => return Err(SourceError::Network(format!("HTTP {other}"))),
    }
    let game: GameRecord =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;
    if !game.is_consistent() {
        return Err(SourceError::Malformed(format!(
            "players {} > maxPlayers {}",
            game.players, game.max_players
        )));
    }
    Ok(game)
}
