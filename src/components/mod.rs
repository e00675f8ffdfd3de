pub mod app;
pub mod error_panel;
pub mod game_area;
pub mod game_controls;
pub mod game_view;
pub mod players_panel;

#[cfg(test)]
pub(crate) async fn render_to_string<C>(props: C::Properties) -> String
where
    C: yew::BaseComponent,
{
    yew::LocalServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}
