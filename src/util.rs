// DOM helpers for the nodes the host page provides.

pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

pub fn set_text_by_id(id: &str, text: &str) {
    match element_by_id(id) {
        Some(el) => el.set_text_content(Some(text)),
        None => tracing::warn!(id, "element not found"),
    }
}
