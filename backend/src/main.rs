mod config;
mod routes;

use std::path::Path;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use classifier::ModelBundle;
use config::ServerConfig;
use routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let serving_root = config.serving_root();
    if serving_root.ends_with("dist") {
        log::info!("Serving built frontend from {}", serving_root.display());
    } else {
        log::warn!(
            "No frontend build found, serving sources from {}",
            serving_root.display()
        );
    }

    check_model_bundle(&config.model_dir());

    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "OPTIONS"])
                    .max_age(3600),
            )
            .app_data(web::Data::new(config.clone()))
            .configure(configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}

/// Loads the bundle the browser will fetch so a broken artifact shows up in
/// the server log. The server starts either way; the page degrades on its own.
fn check_model_bundle(model_dir: &Path) {
    match ModelBundle::load_dir(model_dir) {
        Ok(bundle) => {
            let labels = bundle.labels();
            if labels.is_absent() {
                log::warn!("Model bundle has no labels; predictions will show class indices");
            } else {
                log::info!("Model labels: {}", labels.as_slice().join(", "));
            }
            log::info!("Model input resolution: {}px", bundle.resolution());
        }
        Err(e) => {
            log::warn!(
                "Model bundle at {} is not usable, analysis will be disabled in the browser: {}",
                model_dir.display(),
                e
            );
        }
    }
}
