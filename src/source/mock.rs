use super::GameSource;
use crate::error::SourceError;
use crate::model::{GameRecord, sample_games};
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use std::collections::HashMap;
use std::time::Duration;

/// In-memory table standing in for the backend. Every lookup waits
/// `latency` first, hit or miss.
#[derive(Debug, Clone)]
pub struct MockGameSource {
    games: HashMap<String, GameRecord>,
    latency: Duration,
}

impl MockGameSource {
    pub fn new(latency: Duration) -> Self {
        Self::with_games(sample_games(), latency)
    }

    pub fn with_games(games: impl IntoIterator<Item = GameRecord>, latency: Duration) -> Self {
        Self {
            games: games.into_iter().map(|g| (g.id.to_string(), g)).collect(),
            latency,
        }
    }
}

#[async_trait(?Send)]
impl GameSource for MockGameSource {
    async fn fetch_game(&self, game_id: &str) -> Result<GameRecord, SourceError> {
        if !self.latency.is_zero() {
            let millis = u32::try_from(self.latency.as_millis()).unwrap_or(u32::MAX);
            TimeoutFuture::new(millis).await;
        }
        self.games.get(game_id).cloned().ok_or(SourceError::NotFound)
    }
}
