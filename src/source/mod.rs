//! Where game records come from.

mod http;
mod mock;

pub use http::HttpGameSource;
pub use mock::MockGameSource;

use crate::config::Config;
use crate::error::SourceError;
use crate::model::GameRecord;
use async_trait::async_trait;
use std::rc::Rc;

/// Lookup of a game record by its id, as taken from the page URL.
#[async_trait(?Send)]
pub trait GameSource {
    async fn fetch_game(&self, game_id: &str) -> Result<GameRecord, SourceError>;
}

pub fn from_config(config: &Config) -> Rc<dyn GameSource> {
    match &config.api_base {
        Some(base) => {
            tracing::info!(api_base = %base, "using http game source");
            Rc::new(HttpGameSource::new(base.as_str()))
        }
        None => Rc::new(MockGameSource::new(config.mock_latency)),
    }
}
