use super::error_panel::ErrorPanel;
use super::game_view::GameView;
use crate::actions::{Action, GameActions};
use crate::source::GameSource;
use crate::state::load::{LoadState, load_game};
use crate::state::session::Session;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct AppProps {
    pub session: Session,
    pub source: Rc<dyn GameSource>,
    pub actions: GameActions,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
            && Rc::ptr_eq(&self.source, &other.source)
            && self.actions == other.actions
    }
}

/// Root of `#game-content`: loads the session's game once, then renders it
/// or the error panel.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_state(|| LoadState::Loading);

    {
        let state = state.clone();
        let source = props.source.clone();
        use_effect_with(props.session.game_id.clone(), move |game_id| {
            let game_id = game_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                state.set(load_game(&*source, &game_id).await);
            });
            || ()
        });
    }

    let on_action = use_callback(props.actions.clone(), |action: Action, actions| {
        actions.dispatch(action)
    });
    let on_return = use_callback(props.actions.clone(), |_: (), actions| {
        actions.return_to_lobby()
    });

    html! {
        <RoomContent
            state={(*state).clone()}
            username={props.session.username.clone()}
            on_action={on_action}
            on_return={on_return}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct RoomContentProps {
    pub state: LoadState,
    pub username: String,
    pub on_action: Callback<Action>,
    pub on_return: Callback<()>,
}

#[function_component]
pub fn RoomContent(props: &RoomContentProps) -> Html {
    match &props.state {
        LoadState::Loading => html! {
            <div class="loading" style="text-align:center; padding:40px;">{"Загрузка игры..."}</div>
        },
        LoadState::Loaded(game) => html! {
            <GameView game={game.clone()} username={props.username.clone()} on_action={props.on_action.clone()} />
        },
        LoadState::Failed(message) => html! {
            <ErrorPanel message={message.clone()} on_return={props.on_return.clone()} />
        },
    }
}
