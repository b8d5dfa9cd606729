use super::super::App;
use yew::prelude::*;

pub fn render_result(model: &App) -> Html {
    let Some(result) = model.status.result() else {
        return html! {};
    };

    html! {
        <div class="result card result-anim">
            <h2>{"Analysis"}</h2>
            <p class="result-line">
                <strong>{"Skin Type:"}</strong>{" "}{ &result.label }{" "}
                <span class="confidence">
                    { format!("(Confidence: {}%)", result.confidence_percent()) }
                </span>
            </p>
            <p class="result-line">
                <strong>{"Recommendation:"}</strong>{" "}{ &result.tip }
            </p>
        </div>
    }
}

pub fn render_error(model: &App) -> Html {
    let Some(message) = model.status.error() else {
        return html! {};
    };

    html! {
        <div class="error card">
            <h3>{"Something went wrong"}</h3>
            <pre>{ message }</pre>
        </div>
    }
}
