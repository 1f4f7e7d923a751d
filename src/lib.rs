pub mod config;
pub mod errors;
pub mod net;

pub use config::CacheConfig;
pub use errors::ResponseError;
pub use net::Response;
