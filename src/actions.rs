//! Handlers behind the rendered controls. None of them change game state;
//! they only talk to the browser through a [`Host`].

use crate::model::GameStatus;
use async_trait::async_trait;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Browser side effects used by the actions.
#[async_trait(?Send)]
pub trait Host {
    fn notify(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    fn navigate(&self, route: &str);
    fn current_url(&self) -> Option<String>;
    async fn copy_text(&self, text: &str) -> Result<(), String>;
}

pub struct BrowserHost;

#[async_trait(?Send)]
impl Host for BrowserHost {
    fn notify(&self, message: &str) {
        if let Some(win) = web_sys::window() {
            if let Err(err) = win.alert_with_message(message) {
                warn!(message, ?err, "alert failed");
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn navigate(&self, route: &str) {
        if let Some(win) = web_sys::window() {
            if let Err(err) = win.location().set_href(route) {
                warn!(route, ?err, "navigation failed");
            }
        }
    }

    fn current_url(&self) -> Option<String> {
        web_sys::window()?.location().href().ok()
    }

    async fn copy_text(&self, text: &str) -> Result<(), String> {
        let win = web_sys::window().ok_or_else(|| "no window".to_string())?;
        let promise: js_sys::Promise = win.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err: JsValue| err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    StartGame,
    LeaveGame,
    InviteFriends,
    MakeMove,
    Surrender,
    PlayAgain,
    ReturnToLobby,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::StartGame => "Начать игру",
            Action::LeaveGame => "Покинуть игру",
            Action::InviteFriends => "Пригласить друзей",
            Action::MakeMove => "Сделать ход",
            Action::Surrender => "Сдаться",
            Action::PlayAgain => "Играть снова",
            Action::ReturnToLobby => "Вернуться в лобби",
        }
    }

    /// Stable key for the `data-action` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Action::StartGame => "start",
            Action::LeaveGame => "leave",
            Action::InviteFriends => "invite",
            Action::MakeMove => "move",
            Action::Surrender => "surrender",
            Action::PlayAgain => "play-again",
            Action::ReturnToLobby => "return-to-lobby",
        }
    }
}

/// Bottom control row for a status.
pub fn controls_for(status: GameStatus) -> &'static [Action] {
    match status {
        GameStatus::Waiting => &[Action::LeaveGame, Action::InviteFriends],
        GameStatus::InProgress => &[Action::MakeMove, Action::Surrender],
        GameStatus::Finished => &[Action::ReturnToLobby],
    }
}

/// Button shown inside the game area, if any.
pub fn area_action(status: GameStatus) -> Option<Action> {
    match status {
        GameStatus::Waiting => Some(Action::StartGame),
        GameStatus::InProgress => None,
        GameStatus::Finished => Some(Action::PlayAgain),
    }
}

#[derive(Clone)]
pub struct GameActions {
    host: Rc<dyn Host>,
    lobby_route: Rc<str>,
}

impl PartialEq for GameActions {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.host, &other.host) && self.lobby_route == other.lobby_route
    }
}

impl GameActions {
    pub fn new(host: Rc<dyn Host>, lobby_route: &str) -> Self {
        Self {
            host,
            lobby_route: Rc::from(lobby_route),
        }
    }

    /// Entry point for rendered controls. Clipboard access runs in the background.
    pub fn dispatch(&self, action: Action) {
        debug!(action = action.key(), "action");
        match action {
            Action::StartGame => self.start_game(),
            Action::LeaveGame => self.leave_game(),
            Action::InviteFriends => {
                let this = self.clone();
                wasm_bindgen_futures::spawn_local(async move { this.invite_friends().await });
            }
            Action::MakeMove => self.make_move(),
            Action::Surrender => self.surrender(),
            Action::PlayAgain => self.play_again(),
            Action::ReturnToLobby => self.return_to_lobby(),
        }
    }

    pub fn start_game(&self) {
        self.host.notify("Игра начинается!");
    }

    pub fn leave_game(&self) {
        if self.host.confirm("Вы уверены, что хотите покинуть игру?") {
            self.host.navigate(&self.lobby_route);
        }
    }

    pub async fn invite_friends(&self) {
        let Some(link) = self.host.current_url() else {
            warn!("no page url to share");
            return;
        };
        match self.host.copy_text(&link).await {
            Ok(()) => self.host.notify("Ссылка на игру скопирована в буфер обмена!"),
            Err(err) => warn!(%err, "clipboard write rejected"),
        }
    }

    pub fn make_move(&self) {
        self.host.notify("Ход сделан!");
    }

    pub fn surrender(&self) {
        if self.host.confirm("Вы уверены, что хотите сдаться?") {
            self.host.notify("Вы сдались!");
        }
    }

    pub fn play_again(&self) {
        self.host.notify("Начинаем новую игру!");
    }

    pub fn return_to_lobby(&self) {
        self.host.navigate(&self.lobby_route);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) enum Event {
        Notice(String),
        Confirm(String),
        Navigate(String),
        Copy(String),
    }

    pub(crate) struct RecordingHost {
        pub confirm_answer: bool,
        pub clipboard_ok: bool,
        pub url: Option<String>,
        pub events: RefCell<Vec<Event>>,
    }

    impl Default for RecordingHost {
        fn default() -> Self {
            Self {
                confirm_answer: true,
                clipboard_ok: true,
                url: Some("https://play.test/game?id=1".into()),
                events: RefCell::default(),
            }
        }
    }

    #[async_trait(?Send)]
    impl Host for RecordingHost {
        fn notify(&self, message: &str) {
            self.events.borrow_mut().push(Event::Notice(message.into()));
        }
        fn confirm(&self, message: &str) -> bool {
            self.events.borrow_mut().push(Event::Confirm(message.into()));
            self.confirm_answer
        }
        fn navigate(&self, route: &str) {
            self.events.borrow_mut().push(Event::Navigate(route.into()));
        }
        fn current_url(&self) -> Option<String> {
            self.url.clone()
        }
        async fn copy_text(&self, text: &str) -> Result<(), String> {
            self.events.borrow_mut().push(Event::Copy(text.into()));
            if self.clipboard_ok {
                Ok(())
            } else {
                Err("NotAllowedError".into())
            }
        }
    }

    fn setup(host: RecordingHost) -> (Rc<RecordingHost>, GameActions) {
        let host = Rc::new(host);
        let actions = GameActions::new(host.clone(), "/lobby");
        (host, actions)
    }

    fn events(host: &RecordingHost) -> Vec<Event> {
        host.events.borrow().clone()
    }

    #[test]
    fn control_sets_per_status() {
        assert_eq!(
            controls_for(GameStatus::Waiting),
            &[Action::LeaveGame, Action::InviteFriends]
        );
        assert_eq!(
            controls_for(GameStatus::InProgress),
            &[Action::MakeMove, Action::Surrender]
        );
        assert_eq!(controls_for(GameStatus::Finished), &[Action::ReturnToLobby]);
    }

    #[test]
    fn area_buttons_per_status() {
        assert_eq!(area_action(GameStatus::Waiting), Some(Action::StartGame));
        assert_eq!(area_action(GameStatus::InProgress), None);
        assert_eq!(area_action(GameStatus::Finished), Some(Action::PlayAgain));
    }

    #[test]
    fn leave_navigates_only_when_confirmed() {
        let (host, actions) = setup(RecordingHost::default());
        actions.leave_game();
        assert_eq!(
            events(&host),
            vec![
                Event::Confirm("Вы уверены, что хотите покинуть игру?".into()),
                Event::Navigate("/lobby".into()),
            ]
        );

        let (host, actions) = setup(RecordingHost {
            confirm_answer: false,
            ..Default::default()
        });
        actions.leave_game();
        assert!(!events(&host).iter().any(|e| matches!(e, Event::Navigate(_))));
    }

    #[test]
    fn surrender_notice_only_when_confirmed() {
        let (host, actions) = setup(RecordingHost {
            confirm_answer: false,
            ..Default::default()
        });
        actions.surrender();
        assert_eq!(
            events(&host),
            vec![Event::Confirm("Вы уверены, что хотите сдаться?".into())]
        );

        let (host, actions) = setup(RecordingHost::default());
        actions.surrender();
        assert_eq!(events(&host).last(), Some(&Event::Notice("Вы сдались!".into())));
    }

    #[test]
    fn stub_actions_show_notices() {
        let (host, actions) = setup(RecordingHost::default());
        actions.start_game();
        actions.make_move();
        actions.play_again();
        actions.return_to_lobby();
        assert_eq!(
            events(&host),
            vec![
                Event::Notice("Игра начинается!".into()),
                Event::Notice("Ход сделан!".into()),
                Event::Notice("Начинаем новую игру!".into()),
                Event::Navigate("/lobby".into()),
            ]
        );
    }

    #[test]
    fn dispatch_routes_each_action() {
        let cases = [
            (Action::StartGame, vec![Event::Notice("Игра начинается!".into())]),
            (
                Action::LeaveGame,
                vec![
                    Event::Confirm("Вы уверены, что хотите покинуть игру?".into()),
                    Event::Navigate("/lobby".into()),
                ],
            ),
            (Action::MakeMove, vec![Event::Notice("Ход сделан!".into())]),
            (
                Action::Surrender,
                vec![
                    Event::Confirm("Вы уверены, что хотите сдаться?".into()),
                    Event::Notice("Вы сдались!".into()),
                ],
            ),
            (Action::PlayAgain, vec![Event::Notice("Начинаем новую игру!".into())]),
            (Action::ReturnToLobby, vec![Event::Navigate("/lobby".into())]),
        ];
        for (action, expected) in cases {
            let (host, actions) = setup(RecordingHost::default());
            actions.dispatch(action);
            assert_eq!(events(&host), expected, "{action:?}");
        }
    }

    #[tokio::test]
    async fn invite_copies_page_url() {
        let (host, actions) = setup(RecordingHost::default());
        actions.invite_friends().await;
        assert_eq!(
            events(&host),
            vec![
                Event::Copy("https://play.test/game?id=1".into()),
                Event::Notice("Ссылка на игру скопирована в буфер обмена!".into()),
            ]
        );
    }

    #[tokio::test]
    async fn invite_failure_is_silent() {
        let (host, actions) = setup(RecordingHost {
            clipboard_ok: false,
            ..Default::default()
        });
        actions.invite_friends().await;
        assert_eq!(
            events(&host),
            vec![Event::Copy("https://play.test/game?id=1".into())]
        );

        let (host, actions) = setup(RecordingHost {
            url: None,
            ..Default::default()
        });
        actions.invite_friends().await;
        assert!(events(&host).is_empty());
    }

    #[test]
    fn custom_lobby_route() {
        let host = Rc::new(RecordingHost::default());
        let actions = GameActions::new(host.clone(), "/rooms");
        actions.return_to_lobby();
        assert_eq!(events(&host), vec![Event::Navigate("/rooms".into())]);
    }
}
