mod components;
mod consent;
mod loader;

use classifier::{ClassifierError, InferenceInvoker, ModelBundle};
use consent::LocalConsentStore;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{AnalysisStatus, ConsentGate};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::consent_modal::render_consent_modal;
use components::handlers;
use components::header::render_header;
use components::notice::render_notice;
use components::results::{render_error, render_result};
use components::upload_section::{render_actions, render_upload_section};

// Yew msg components
pub enum Msg {
    // Model lifecycle
    ModelLoaded(Result<ModelBundle, ClassifierError>),

    // File operations
    FileSelected(Option<GlooFile>),

    // Analysis operations
    Analyze,
    ImageRead(Result<Vec<u8>, String>),

    // Consent prompt
    ConsentAccepted,
    ConsentCancelled,
    SetDontAskAgain(bool),
}

// Main component
pub struct App {
    file: Option<GlooFile>,
    preview_url: Option<ObjectUrl>,
    status: AnalysisStatus,
    invoker: InferenceInvoker,
    consent: ConsentGate<LocalConsentStore>,
    dont_ask_again: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let loaded = loader::load_model_bundle().await;
            link.send_message(Msg::ModelLoaded(loaded));
        });

        Self {
            file: None,
            preview_url: None,
            status: AnalysisStatus::Loading,
            invoker: InferenceInvoker::new(),
            consent: ConsentGate::new(LocalConsentStore),
            dont_ask_again: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ModelLoaded(loaded) => handlers::handle_model_loaded(self, loaded),
            Msg::FileSelected(file) => handlers::handle_file_selected(self, file),
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::ImageRead(bytes) => handlers::handle_image_read(self, bytes),
            Msg::ConsentAccepted => handlers::handle_consent_accepted(self, ctx),
            Msg::ConsentCancelled => {
                self.consent.cancel();
                true
            }
            Msg::SetDontAskAgain(checked) => {
                self.dont_ask_again = checked;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-root">
                <div class="container card">
                    { render_header() }
                    { render_upload_section(self, ctx) }
                    { render_actions(self, ctx) }
                    { render_result(self) }
                    { render_error(self) }
                    { render_notice() }
                    { render_consent_modal(self, ctx) }
                </div>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
