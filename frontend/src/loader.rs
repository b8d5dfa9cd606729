use classifier::{ClassifierError, ModelBundle};
use gloo_net::http::Request;
use shared::{METADATA_FILE, MODEL_BUNDLE_DIR, MODEL_FILE};

fn bundle_url(file: &str) -> String {
    format!("/{}/{}", MODEL_BUNDLE_DIR, file)
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error fetching {}: {}", url, e))?;

    if !response.ok() {
        return Err(format!("Server returned {} for {}", response.status(), url));
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read {}: {}", url, e))
}

/// Fetches the model artifact and its metadata. Only the model is required.
pub async fn load_model_bundle() -> Result<ModelBundle, ClassifierError> {
    let model_url = bundle_url(MODEL_FILE);
    log::info!("Loading model from {}", model_url);
    let model_bytes = fetch_bytes(&model_url)
        .await
        .map_err(ClassifierError::ModelLoad)?;

    let metadata = fetch_bytes(&bundle_url(METADATA_FILE)).await;
    ModelBundle::from_bytes(&model_bytes, metadata)
}
