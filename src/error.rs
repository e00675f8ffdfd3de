/// Failure of a game lookup. Every variant ends up in the same error panel,
/// so the display strings are user-facing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("Игра не найдена")]
    NotFound,
    #[error("Сетевая ошибка: {0}")]
    Network(String),
    #[error("Некорректные данные игры: {0}")]
    Malformed(String),
}
