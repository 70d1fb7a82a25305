//! Static file fallback module
//!
//! Serves any unmatched route from the configured root directory (the
//! working directory by default), with index file support and the device
//! page content-type overrides applied by the MIME layer.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

use crate::config::FilesConfig;
use crate::http::{self, mime, response};
use crate::logger;
use crate::state::AppState;

/// Serve the fallback file for an unmatched route
pub async fn serve(state: &AppState, path: &str) -> Response<Full<Bytes>> {
    match load(&state.config.files, path).await {
        Some((content, content_type)) => {
            if state
                .cached_access_log
                .load(std::sync::atomic::Ordering::Relaxed)
            {
                logger::log_response(content.len());
            }
            response::build_static_file_response(content, content_type)
        }
        None => http::build_404_response(),
    }
}

/// Load a file from the fallback root with index file support
pub async fn load(files: &FilesConfig, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");

    let mut file_path = Path::new(&files.root).join(&clean_path);

    let root_canonical = match Path::new(&files.root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static root not found or inaccessible '{}': {e}",
                files.root
            ));
            return None;
        }
    };

    // Directory requested: try index files
    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        for index_file in &files.index_files {
            let index_path = file_path.join(index_file);
            if index_path.is_file() {
                file_path = index_path;
                break;
            }
        }
    }

    // File not found is an ordinary 404, no log line
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::content_type_for_path(&file_path);
    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use std::path::PathBuf;

    fn fixture_root(name: &str) -> (PathBuf, FilesConfig) {
        let root = std::env::temp_dir().join(format!("emulator-static-{name}-{}", std::process::id()));
        std_fs::create_dir_all(&root).expect("create fixture root");
        let files = FilesConfig {
            root: root.to_string_lossy().into_owned(),
            index_files: vec!["index.html".to_string()],
        };
        (root, files)
    }

    #[tokio::test]
    async fn serves_extensionless_device_page_as_html() {
        let (root, files) = fixture_root("overview");
        std_fs::write(root.join("overview"), "<html>overview</html>").expect("write fixture");

        let (content, content_type) = load(&files, "/overview").await.expect("file served");
        assert_eq!(content, b"<html>overview</html>");
        assert_eq!(content_type, "text/html");

        std_fs::remove_dir_all(&root).ok();
    }

    #[tokio::test]
    async fn serves_style_as_css_and_extensions_by_table() {
        let (root, files) = fixture_root("style");
        std_fs::write(root.join("style"), "body{}").expect("write fixture");
        std_fs::write(root.join("readme.txt"), "hi").expect("write fixture");

        let (_, css_type) = load(&files, "/style").await.expect("file served");
        assert_eq!(css_type, "text/css");

        let (_, txt_type) = load(&files, "/readme.txt").await.expect("file served");
        assert_eq!(txt_type, "text/plain; charset=utf-8");

        std_fs::remove_dir_all(&root).ok();
    }

    #[tokio::test]
    async fn missing_file_yields_none() {
        let (root, files) = fixture_root("missing");
        assert!(load(&files, "/no-such-file").await.is_none());
        std_fs::remove_dir_all(&root).ok();
    }

    #[tokio::test]
    async fn root_request_uses_index_file() {
        let (root, files) = fixture_root("index");
        std_fs::write(root.join("index.html"), "<html>home</html>").expect("write fixture");

        let (content, content_type) = load(&files, "/").await.expect("index served");
        assert_eq!(content, b"<html>home</html>");
        assert_eq!(content_type, "text/html; charset=utf-8");

        std_fs::remove_dir_all(&root).ok();
    }
}
