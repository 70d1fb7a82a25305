//! HTTP protocol layer module
//!
//! MIME inference and response builders, decoupled from the device
//! endpoints and static serving that use them.

pub mod mime;
pub mod response;

pub use response::{
    build_404_response, build_500_response, build_empty_ok, build_json_response,
    build_text_response,
};
