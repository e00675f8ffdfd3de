use std::rc::Rc;

use yew_game_room::actions::{BrowserHost, GameActions};
use yew_game_room::components::app::{App, AppProps};
use yew_game_room::config::Config;
use yew_game_room::state::session::Session;
use yew_game_room::{source, util};

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = Config::from_build_env();
    let session = Session::from_browser();
    tracing::info!(game_id = %session.game_id, username = %session.username, "game room starting");
    util::set_text_by_id("username", &session.username);

    let props = AppProps {
        source: source::from_config(&config),
        actions: GameActions::new(Rc::new(BrowserHost), &config.lobby_route),
        session,
    };
    match util::element_by_id("game-content") {
        Some(root) => {
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => tracing::error!("#game-content not found, nothing to render"),
    }
}
