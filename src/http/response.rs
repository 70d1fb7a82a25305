//! HTTP response building module
//!
//! Builders for the response shapes the emulator produces. A builder
//! failure is logged and replaced with an empty response instead of
//! panicking the connection task.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 text/plain response with the given body
pub fn build_text_response(body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("200 text", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 application/json response with the given body
pub fn build_json_response(body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("200 json", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 text/plain response with an empty body (write acknowledgments)
pub fn build_empty_ok() -> Response<Full<Bytes>> {
    build_text_response(String::new())
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response(message: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(message.to_string())))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 response for static file content
pub fn build_static_file_response(data: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    let content_length = data.len();
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(data)))
        .unwrap_or_else(|e| {
            log_build_error("200 file", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_response_has_plain_content_type() {
        let resp = build_text_response("hello".to_string());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
    }

    #[test]
    fn empty_ok_has_no_body_content() {
        let resp = build_empty_ok();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
    }

    #[test]
    fn error_responses_carry_expected_status() {
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_500_response("boom").status(), 500);
    }
}
