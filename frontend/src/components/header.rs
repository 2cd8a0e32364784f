use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"Depression Prediction"}</h1>
            <p class="subtitle">{"Answer the questions below, review your answers, then predict"}</p>
        </header>
    }
}
