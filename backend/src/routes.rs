use std::path::{Component, Path, PathBuf};

use actix_files::NamedFile;
use actix_web::{Error, web};
use log::debug;

use crate::config::ServerConfig;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{path:.*}").route(web::get().to(serve_frontend)));
}

async fn serve_frontend(
    config: web::Data<ServerConfig>,
    path: web::Path<String>,
) -> Result<NamedFile, Error> {
    let file = resolve_file(&config.serving_root(), &path.into_inner());
    debug!("Serving {}", file.display());
    Ok(NamedFile::open_async(file).await?)
}

/// Maps a request path onto the serving root. Anything that is not an
/// existing file under the root (including attempts to climb out of it)
/// falls back to `index.html` so client-side routes still load the app.
pub fn resolve_file(root: &Path, request_path: &str) -> PathBuf {
    safe_join(root, request_path)
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| root.join("index.html"))
}

fn safe_join(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut joined = root.to_path_buf();
    let mut pushed = false;
    for component in Path::new(request_path).components() {
        match component {
            Component::Normal(segment) => {
                joined.push(segment);
                pushed = true;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    pushed.then_some(joined)
}
