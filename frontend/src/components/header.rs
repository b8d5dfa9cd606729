use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="header">
            <h1>{"Skin Awareness — Quick Check"}</h1>
            <p class="subtitle">
                {"Upload a clear face photo. This tool runs a local model for awareness, not diagnosis."}
            </p>
        </header>
    }
}
