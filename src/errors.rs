use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// The cached record predates the current `{body, headers}` layout.
    #[error("Old cache detected. Clear the cache under \"{}\".", cache_dir.display())]
    StaleCacheFormat { cache_dir: PathBuf },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
