use super::game_controls::action_button;
use crate::actions::{Action, area_action};
use crate::model::{GameRecord, GameStatus};
use std::rc::Rc;
use yew::prelude::*;

const AREA_STYLE: &str = "text-align:center; padding:40px; color:white;";

#[derive(Properties, PartialEq, Clone)]
pub struct GameAreaProps {
    pub game: Rc<GameRecord>,
    pub on_action: Callback<Action>,
}

#[function_component]
pub fn GameArea(props: &GameAreaProps) -> Html {
    let game = &props.game;
    let button = area_action(game.status)
        .map(|a| action_button(a, &props.on_action))
        .unwrap_or_default();
    let body = match game.status {
        GameStatus::Waiting => html! {<>
            <h4>{"Ожидаем игроков..."}</h4>
            <p>{ format!("Присоединилось: {}/{}", game.players, game.max_players) }</p>
        </>},
        GameStatus::InProgress => html! {<>
            <h4>{"Игра в процессе!"}</h4>
            <p>{"Действуйте быстро, время ограничено!"}</p>
            <div id="game-timer">{ format!("Осталось: {}", game.duration) }</div>
        </>},
        GameStatus::Finished => html! {<>
            <h4>{"Игра завершена!"}</h4>
            <p>{ format!("Победитель: {}", game.winner().unwrap_or("—")) }</p>
        </>},
    };
    html! {<div class="game-area">
        <h3>{"Игровая зона"}</h3>
        <div style={AREA_STYLE}>
            { body }
            { button }
        </div>
    </div>}
}
