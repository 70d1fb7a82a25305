//! MIME type detection module
//!
//! Extension-based Content-Type inference, with a handful of extension-less
//! device UI pages special-cased by base name (the device firmware ships
//! them without extensions).

use std::path::Path;

/// Content-Type for a file path.
///
/// Base names `internet`, `overview` and `settings` are forced to
/// `text/html` and `style` to `text/css`; everything else falls through to
/// extension-based inference.
pub fn content_type_for_path(path: &Path) -> &'static str {
    match path.file_name().and_then(|n| n.to_str()) {
        Some("internet" | "overview" | "settings") => "text/html",
        Some("style") => "text/css",
        _ => get_content_type(path.extension().and_then(|e| e.to_str())),
    }
}

/// Get MIME Content-Type based on file extension
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // JavaScript/WASM
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",

        // Documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",

        // Default
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(get_content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(get_content_type(Some("css")), "text/css");
        assert_eq!(get_content_type(Some("js")), "application/javascript");
        assert_eq!(get_content_type(Some("json")), "application/json");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type(Some("xyz")), "application/octet-stream");
        assert_eq!(get_content_type(None), "application/octet-stream");
    }

    #[test]
    fn test_device_page_overrides() {
        assert_eq!(content_type_for_path(Path::new("./internet")), "text/html");
        assert_eq!(content_type_for_path(Path::new("./overview")), "text/html");
        assert_eq!(content_type_for_path(Path::new("./settings")), "text/html");
        assert_eq!(content_type_for_path(Path::new("./style")), "text/css");
    }

    #[test]
    fn test_override_requires_exact_base_name() {
        // "overview.txt" is not the extension-less page
        assert_eq!(
            content_type_for_path(Path::new("./overview.txt")),
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            content_type_for_path(Path::new("./unknownpage")),
            "application/octet-stream"
        );
    }
}
