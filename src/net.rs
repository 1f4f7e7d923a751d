pub mod headers;
mod response;

pub use headers::Headers;
pub use response::{Response, DEFAULT_STATUS_CODE};
