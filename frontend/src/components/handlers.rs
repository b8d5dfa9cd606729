use super::super::{App, Msg};
use classifier::{ClassifierError, ModelBundle};
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{AnalysisStatus, GateDecision};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_model_loaded(model: &mut App, loaded: Result<ModelBundle, ClassifierError>) -> bool {
    model.invoker.install(loaded);

    match model.invoker.bundle() {
        Ok(bundle) => {
            log::info!("Model ready ({}px input)", bundle.resolution());
            if model.status == AnalysisStatus::Loading {
                model.status = AnalysisStatus::Idle;
            }
        }
        Err(e) => {
            log::warn!("Analysis disabled: {}", e);
            model.status = AnalysisStatus::Error(e.to_string());
        }
    }
    true
}

pub fn handle_file_selected(model: &mut App, file: Option<GlooFile>) -> bool {
    model.preview_url = file.clone().map(ObjectUrl::from);
    model.file = file;
    model.status = model.status.after_file_selected(model.invoker.has_failed());
    true
}

pub fn handle_analyze(model: &mut App, ctx: &Context<App>) -> bool {
    if model.file.is_none() || !model.status.accepts_analysis() {
        return false;
    }

    match model.consent.request() {
        GateDecision::Prompt => true,
        GateDecision::Proceed => start_analysis(model, ctx),
    }
}

pub fn handle_consent_accepted(model: &mut App, ctx: &Context<App>) -> bool {
    model.consent.accept(model.dont_ask_again);
    model.dont_ask_again = false;
    start_analysis(model, ctx);
    true
}

pub fn handle_image_read(model: &mut App, bytes: Result<Vec<u8>, String>) -> bool {
    let outcome = bytes.and_then(|bytes| {
        model
            .invoker
            .predict(&bytes)
            .map_err(|e| e.to_string())
    });

    model.status = match outcome {
        Ok(result) => AnalysisStatus::Done(result),
        Err(message) => {
            log::error!("Analysis failed: {}", message);
            AnalysisStatus::Error(message)
        }
    };
    true
}

fn start_analysis(model: &mut App, ctx: &Context<App>) -> bool {
    if !model.status.accepts_analysis() {
        return false;
    }
    if let Err(e) = model.invoker.bundle() {
        model.status = AnalysisStatus::Error(e.to_string());
        return true;
    }
    let Some(file) = model.file.clone() else {
        return false;
    };

    model.status = AnalysisStatus::Sending;
    send_image(ctx, file);
    true
}

fn send_image(ctx: &Context<App>, file: GlooFile) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let bytes = gloo_file::futures::read_as_bytes(&file)
                .await
                .map_err(|e| format!("Failed to read {}: {}", file.name(), e));
            link.send_message(Msg::ImageRead(bytes));
        }
    });
}
