use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

use shared::MODEL_BUNDLE_DIR;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Frontend crate directory; its `dist/` is preferred when present.
    pub frontend_root: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let frontend_root = match lookup("FRONTEND_ROOT") {
            Some(root) => PathBuf::from(root),
            None => match lookup("CARGO_MANIFEST_DIR") {
                Some(manifest_dir) => PathBuf::from(format!("{}/../frontend", manifest_dir)),
                None => PathBuf::from("/usr/src/app/frontend"),
            },
        };

        Ok(Self {
            host,
            port,
            frontend_root,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `dist/` when a build exists, else the frontend source directory.
    pub fn serving_root(&self) -> PathBuf {
        let dist = self.frontend_root.join("dist");
        if dist.exists() {
            dist
        } else {
            self.frontend_root.clone()
        }
    }

    pub fn model_dir(&self) -> PathBuf {
        self.serving_root().join(MODEL_BUNDLE_DIR)
    }
}
