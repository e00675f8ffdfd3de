use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayersPanelProps {
    pub players: Vec<String>,
    pub username: String,
}

#[function_component]
pub fn PlayersPanel(props: &PlayersPanelProps) -> Html {
    html! {<div class="players-list">
        <h3>{ format!("Участники ({})", props.players.len()) }</h3>
        { for props.players.iter().map(|name| {
            let is_you = *name == props.username;
            html! {<div class={classes!("player-card", is_you.then_some("player-card--you"))}>
                <strong>{ name.clone() }</strong>
                { if is_you { html!{ <div>{"🌟 Вы"}</div> } } else { html!{} } }
            </div>}
        }) }
    </div>}
}
