use crate::actions::{Action, controls_for};
use crate::model::GameStatus;
use yew::prelude::*;

pub fn action_button(action: Action, on_action: &Callback<Action>) -> Html {
    let onclick = {
        let cb = on_action.clone();
        Callback::from(move |_: MouseEvent| cb.emit(action))
    };
    html! {
        <button class="control-button" data-action={action.key()} onclick={onclick}>
            { action.label() }
        </button>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GameControlsProps {
    pub status: GameStatus,
    pub on_action: Callback<Action>,
}

#[function_component]
pub fn GameControls(props: &GameControlsProps) -> Html {
    html! {<div class="game-controls">
        { for controls_for(props.status).iter().map(|&a| action_button(a, &props.on_action)) }
    </div>}
}
