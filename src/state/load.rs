use crate::model::GameRecord;
use crate::source::GameSource;
use std::rc::Rc;
use tracing::{info, warn};

/// What the content area currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Rc<GameRecord>),
    Failed(String),
}

/// Single error boundary of the page: any lookup failure becomes a message
/// for the error panel.
pub async fn load_game(source: &dyn GameSource, game_id: &str) -> LoadState {
    info!(game_id, "loading game");
    match source.fetch_game(game_id).await {
        Ok(game) => {
            info!(game_id, status = game.status.as_str(), "game loaded");
            LoadState::Loaded(Rc::new(game))
        }
        Err(err) => {
            warn!(game_id, error = %err, "failed to load game");
            LoadState::Failed(format!("Ошибка загрузки игры: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GameStatus;
    use crate::source::MockGameSource;
    use std::time::Duration;

    #[tokio::test]
    async fn loads_known_game() {
        let source = MockGameSource::new(Duration::ZERO);
        match load_game(&source, "2").await {
            LoadState::Loaded(game) => {
                assert_eq!(game.name, "Стратегическое сражение");
                assert_eq!(game.status, GameStatus::InProgress);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_game_becomes_message() {
        let source = MockGameSource::new(Duration::ZERO);
        assert_eq!(
            load_game(&source, "9").await,
            LoadState::Failed("Ошибка загрузки игры: Игра не найдена".into())
        );
    }
}
