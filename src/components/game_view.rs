use super::game_area::GameArea;
use super::game_controls::GameControls;
use super::players_panel::PlayersPanel;
use crate::actions::Action;
use crate::model::GameRecord;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub game: Rc<GameRecord>,
    pub username: String,
    pub on_action: Callback<Action>,
}

/// Full room view. Output depends only on the record and the username.
#[function_component]
pub fn GameView(props: &GameViewProps) -> Html {
    let game = &props.game;
    html! {<>
        <div class="game-header">
            <h1 class="game-title">{ game.name.clone() }</h1>
            <p>{ game.description.clone() }</p>
        </div>
        <div class="game-info">
            <div class="info-item">{ format!("ID игры: #{}", game.id) }</div>
            <div class="info-item">{ format!("Тип: {}", game.kind.label()) }</div>
            <div class="info-item">{ format!("Длительность: {}", game.duration) }</div>
            <div class="info-item">{ format!("Игроки: {}/{}", game.players, game.max_players) }</div>
            <div class="info-item">{ format!("Статус: {}", game.status.label()) }</div>
        </div>
        <GameArea game={game.clone()} on_action={props.on_action.clone()} />
        <PlayersPanel players={game.players_list.clone()} username={props.username.clone()} />
        <GameControls status={game.status} on_action={props.on_action.clone()} />
    </>}
}
