//! Middleware stack for the API

pub mod layers;
pub mod request_id;
pub mod security;

// Re-export public API
pub use layers::{compression, cors, trace};
pub use request_id::{request_id_middleware, RequestContext};
pub use security::security_headers_middleware;
