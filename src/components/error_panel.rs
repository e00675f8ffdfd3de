use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorPanelProps {
    pub message: String,
    pub on_return: Callback<()>,
}

#[function_component]
pub fn ErrorPanel(props: &ErrorPanelProps) -> Html {
    let return_cb = {
        let cb = props.on_return.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div class="error-message">
        <h2>{"Ошибка"}</h2>
        <p>{ props.message.clone() }</p>
        <button class="control-button" data-action="return-to-lobby" onclick={return_cb}>{"Вернуться в лобби"}</button>
    </div>}
}
