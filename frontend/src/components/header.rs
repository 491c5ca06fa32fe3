use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-seedling"></i> {" NOVA Inspector"}</h1>
            <p class="subtitle">{"Fotografér ingredienslisten, og få produktets NOVA-gruppe"}</p>
        </header>
    }
}
