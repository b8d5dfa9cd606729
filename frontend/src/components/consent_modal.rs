use super::super::{App, Msg};
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_consent_modal(model: &App, ctx: &Context<App>) -> Html {
    if !model.consent.is_prompting() {
        return html! {};
    }

    let link = ctx.link();
    let handle_toggle = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetDontAskAgain(input.checked())
    });

    html! {
        <div class="modal-backdrop">
            <div class="modal card">
                <h3>{"Before you proceed"}</h3>
                <p>
                    {"This tool analyzes images locally for general skin-type awareness only. \
                      It is NOT a medical diagnosis. Do you consent to proceed?"}
                </p>
                <div class="modal-actions">
                    <label>
                        <input
                            type="checkbox"
                            id="dontshow"
                            checked={model.dont_ask_again}
                            onchange={handle_toggle}
                        />
                        {" Don't show this again"}
                    </label>
                    <div>
                        <button class="btn-muted" onclick={link.callback(|_| Msg::ConsentCancelled)}>
                            {"Cancel"}
                        </button>
                        <button class="primary" onclick={link.callback(|_| Msg::ConsentAccepted)}>
                            {"I consent"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
