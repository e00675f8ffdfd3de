//! Data model for a single game room.
//! Records come from a [`crate::source::GameSource`] and are read-only to the page.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    Adventure,
    Strategy,
    Racing,
}

impl GameType {
    pub const ALL: [GameType; 3] = [GameType::Adventure, GameType::Strategy, GameType::Racing];

    /// Wire name, as it appears in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Adventure => "adventure",
            GameType::Strategy => "strategy",
            GameType::Racing => "racing",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameType::Adventure => "Приключение",
            GameType::Strategy => "Стратегия",
            GameType::Racing => "Гонки",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// Lifecycle of a game room. Drives both the game area and the control set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Waiting,
    InProgress,
    Finished,
}

impl GameStatus {
    pub const ALL: [GameStatus; 3] = [
        GameStatus::Waiting,
        GameStatus::InProgress,
        GameStatus::Finished,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Waiting => "waiting",
            GameStatus::InProgress => "in_progress",
            GameStatus::Finished => "finished",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameStatus::Waiting => "⏳ Ожидание",
            GameStatus::InProgress => "🎮 В процессе",
            GameStatus::Finished => "✅ Завершена",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Localized label for a raw wire type name; unknown names pass through.
pub fn type_name(raw: &str) -> &str {
    GameType::parse(raw).map_or(raw, |t| t.label())
}

/// Localized label for a raw wire status name; unknown names pass through.
pub fn status_name(raw: &str) -> &str {
    GameStatus::parse(raw).map_or(raw, |s| s.label())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: GameType,
    /// Display string, never parsed.
    pub duration: String,
    pub players: u32,
    pub max_players: u32,
    pub status: GameStatus,
    /// Ordered display names. For finished games the first entry is the winner.
    #[serde(default)]
    pub players_list: Vec<String>,
}

impl GameRecord {
    pub fn winner(&self) -> Option<&str> {
        match self.status {
            GameStatus::Finished => self.players_list.first().map(String::as_str),
            GameStatus::Waiting | GameStatus::InProgress => None,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.players <= self.max_players
    }
}

/// The three demo rooms served by the mock source.
pub fn sample_games() -> Vec<GameRecord> {
    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }
    vec![
        GameRecord {
            id: 1,
            name: "Приключенческая битва".into(),
            description: "Увлекательное приключение в мире фэнтези".into(),
            kind: GameType::Adventure,
            duration: "60 минут".into(),
            players: 4,
            max_players: 8,
            status: GameStatus::Waiting,
            players_list: names(&["Игрок123", "Гость1", "Гость2"]),
        },
        GameRecord {
            id: 2,
            name: "Стратегическое сражение".into(),
            description: "Тактическая битва за ресурсы и территории".into(),
            kind: GameType::Strategy,
            duration: "45 минут".into(),
            players: 2,
            max_players: 4,
            status: GameStatus::InProgress,
            players_list: names(&["Игрок123", "Соперник"]),
        },
        GameRecord {
            id: 3,
            name: "Гонки на выживание".into(),
            description: "Экстремальные гонки с элементами выживания".into(),
            kind: GameType::Racing,
            duration: "30 минут".into(),
            players: 6,
            max_players: 12,
            status: GameStatus::Finished,
            players_list: names(&["Победитель", "Второй", "Третий"]),
        },
    ]
}
