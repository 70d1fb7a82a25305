//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Dispatch is exact string
//! equality on (method, path); anything unmatched goes to the static file
//! fallback regardless of method.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::handler::{device, static_files};
use crate::logger;
use crate::state::AppState;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        logger::log_request(&method, req.uri(), req.version());
    }

    // Absent bodies (no Content-Length) collect to zero bytes
    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            Bytes::new()
        }
    };

    Ok(route_request(&method, &path, &body, &state).await)
}

/// Dispatch on (method, path); unmatched pairs fall back to static serving
pub async fn route_request(
    method: &Method,
    path: &str,
    body: &Bytes,
    state: &AppState,
) -> Response<Full<Bytes>> {
    match *method {
        Method::GET => match path {
            "/ve_infos" => device::ve_infos(),
            "/logs" => device::logs(state),
            "/discovered_wifis" => device::discovered_wifis(),
            "/ap_active" => device::ap_active(state).await,
            "/host_name" => device::host_name(state).await,
            "/user" => device::user(state),
            "/time" => device::current_time(),
            _ => static_files::serve(state, path).await,
        },
        Method::POST => match path {
            "/host_name" => device::update_host_name(state, body).await,
            "/ap_active" => device::update_ap_active(state, body).await,
            "/wifi_connect" => device::wifi_connect(body),
            "/login" => device::login(state, body).await,
            _ => static_files::serve(state, path).await,
        },
        Method::PUT => {
            // Two independent checks, matching the device firmware: a
            // matched /set_password returns before the /time check, and
            // only the second check's else-branch reaches the fallback.
            if path == "/set_password" {
                return device::set_password(body);
            }
            if path == "/time" {
                device::update_time(body)
            } else {
                static_files::serve(state, path).await
            }
        }
        _ => static_files::serve(state, path).await,
    }
}
