// File: kickwire-common/src/models/mod.rs
pub mod api;
pub mod event_family;
pub mod scope;

pub use api::{decode_api_response, ApiResponse, EmptyResponse};
pub use event_family::EventFamily;
pub use scope::Scope;
