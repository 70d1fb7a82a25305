//! Request handler module
//!
//! Routing dispatch, the device management endpoints, and the static file
//! fallback they delegate to.

pub mod device;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
