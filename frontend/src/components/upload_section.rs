use super::super::{App, Msg};
use super::utils::{debounce, first_file};
use shared::{AnalysisStatus, analyze_enabled};
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_upload_section(model: &App, ctx: &Context<App>) -> Html {
    let handle_change = ctx.link().callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);
        Msg::FileSelected(file)
    });

    html! {
        <div class="uploader">
            <label class="dropzone" for="file-input">
                <input id="file-input" type="file" accept="image/*" onchange={handle_change} />
                <div class="drop-inner">
                    <div class="icon">{"📷"}</div>
                    <div class="text">{"Drop or click to choose an image"}</div>
                    <div class="hint">{"Try a close-up of your face (no ID needed)"}</div>
                </div>
            </label>

            <div class="preview-area">
                { render_preview(model) }
            </div>
        </div>
    }
}

fn render_preview(model: &App) -> Html {
    match &model.preview_url {
        Some(url) => {
            let sending = model.status == AnalysisStatus::Sending;
            html! {
                <div class={classes!("preview", "animated", sending.then_some("pulse"))}>
                    <img src={url.to_string()} alt="preview" />
                </div>
            }
        }
        None => html! { <div class="preview empty">{"No image selected"}</div> },
    }
}

pub fn render_actions(model: &App, ctx: &Context<App>) -> Html {
    let enabled = analyze_enabled(
        model.file.is_some(),
        model.invoker.is_ready(),
        &model.status,
    );
    let link = ctx.link().clone();

    html! {
        <div class="actions">
            <button
                class="primary"
                onclick={debounce(300, move || link.send_message(Msg::Analyze))}
                disabled={!enabled}
            >
                { analyze_label(model) }
            </button>
        </div>
    }
}

fn analyze_label(model: &App) -> &'static str {
    match model.status {
        AnalysisStatus::Loading => "Loading model...",
        AnalysisStatus::Sending => "Analyzing...",
        _ => "Analyze skin",
    }
}
