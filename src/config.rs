use std::path::PathBuf;

const DEFAULT_CACHE_DIR: &str = "~/.composer/cache/repo/https---symfony.sh/";

/// Cache configuration shared by the components that read and write cached responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Directory holding the cached response records. Shown to the user when a
    /// stale cache entry has to be cleared by hand.
    pub cache_dir: PathBuf,
}

impl CacheConfig {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
        }
    }
}
