//! Device endpoint handlers
//!
//! Implements the fixed management endpoints of the emulated device. Reads
//! return canned fixtures or the current fixture state; writes overwrite
//! that state wholesale. Nothing is persisted.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;

use crate::http;
use crate::logger;
use crate::state::AppState;

/// Fixed device-info fixture: one record with only a name and flag, one
/// with mixed-typed fields. Served verbatim as text/plain.
const VE_INFOS: &str = r#"[{"name":"One thing","a":"true"}, {"name":"and another","int":15,"float":2.4,"string":"works"}]"#;

/// Discovered access point fixture record
#[derive(Debug, Serialize)]
struct DiscoveredWifi {
    ssid: &'static str,
    /// Signal strength in dBm
    rssi: i32,
    connected: bool,
}

const DISCOVERED_WIFIS: [DiscoveredWifi; 2] = [
    DiscoveredWifi {
        ssid: "test1",
        rssi: -61,
        connected: false,
    },
    DiscoveredWifi {
        ssid: "test2",
        rssi: -31,
        connected: true,
    },
];

/// GET `/ve_infos`
pub fn ve_infos() -> Response<Full<Bytes>> {
    http::build_text_response(VE_INFOS.to_string())
}

/// GET `/logs` — embeds the current log counter, then increments it
pub fn logs(state: &AppState) -> Response<Full<Bytes>> {
    let count = state.device.bump_log_counter();
    http::build_text_response(format!(
        "[info] logs counter at {count}  .................................................................................."
    ))
}

/// GET `/discovered_wifis`
pub fn discovered_wifis() -> Response<Full<Bytes>> {
    let body = serde_json::to_string(&DISCOVERED_WIFIS).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to serialize wifi fixture: {e}"));
        String::new()
    });
    http::build_json_response(body)
}

/// GET `/ap_active`
pub async fn ap_active(state: &AppState) -> Response<Full<Bytes>> {
    http::build_text_response(state.device.ap_active().await)
}

/// GET `/host_name`
pub async fn host_name(state: &AppState) -> Response<Full<Bytes>> {
    http::build_text_response(state.device.hostname().await)
}

/// GET `/user` — reports the login counter but increments the LOG counter,
/// matching the device firmware's behavior.
pub fn user(state: &AppState) -> Response<Full<Bytes>> {
    let body = format!("Du {}", state.device.login_count());
    state.device.bump_log_counter();
    http::build_text_response(body)
}

/// GET `/time` — current Unix epoch time in whole seconds
pub fn current_time() -> Response<Full<Bytes>> {
    http::build_text_response(chrono::Utc::now().timestamp().to_string())
}

/// POST `/host_name`
pub async fn update_host_name(state: &AppState, body: &Bytes) -> Response<Full<Bytes>> {
    state.device.set_hostname(decode_body(body)).await;
    http::build_empty_ok()
}

/// POST `/ap_active`
pub async fn update_ap_active(state: &AppState, body: &Bytes) -> Response<Full<Bytes>> {
    state.device.set_ap_active(decode_body(body)).await;
    http::build_empty_ok()
}

/// POST `/wifi_connect` — body is `"<ssid> <pwd>"`, split on the first
/// space. A body without a separator is a request-level failure (500),
/// never fatal to the process.
pub fn wifi_connect(body: &Bytes) -> Response<Full<Bytes>> {
    let text = decode_body(body);
    match text.split_once(' ') {
        Some((ssid, pwd)) => {
            logger::log_wifi_attempt(ssid, pwd);
            http::build_empty_ok()
        }
        None => {
            logger::log_error(&format!(
                "wifi_connect body missing ssid/password separator: '{text}'"
            ));
            http::build_500_response("wifi_connect body missing ssid/password separator")
        }
    }
}

/// POST `/login` — overwrites the access-point flag with the submitted
/// body (firmware quirk, kept as-is), then counts the login.
pub async fn login(state: &AppState, body: &Bytes) -> Response<Full<Bytes>> {
    state.device.set_ap_active(decode_body(body)).await;
    state.device.bump_login_counter();
    http::build_empty_ok()
}

/// PUT `/set_password` — the value is only logged, no state field exists
pub fn set_password(body: &Bytes) -> Response<Full<Bytes>> {
    logger::log_password_update(&decode_body(body));
    http::build_empty_ok()
}

/// PUT `/time` — the proposed time is only logged, no clock changes
pub fn update_time(body: &Bytes) -> Response<Full<Bytes>> {
    logger::log_time_update(&decode_body(body));
    http::build_empty_ok()
}

fn decode_body(body: &Bytes) -> String {
    String::from_utf8_lossy(body).into_owned()
}
