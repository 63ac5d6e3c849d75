use std::fs;
use std::path::{Path, PathBuf};

use tiny_http::Method;

use crate::error::ServerError;

/// Where a request path leads once the query string is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The project catalog document.
    Data,
    /// A file relative to the web root.
    File(PathBuf),
}

/// Map a request URL to a route. `None` for paths that try to leave the web root.
pub fn resolve(url: &str) -> Option<Route> {
    let path = url.split(['?', '#']).next().unwrap_or_default();

    match path {
        "" | "/" => return Some(Route::File(PathBuf::from("index.html"))),
        "/get_data" => return Some(Route::Data),
        _ => {}
    }

    let mut relative = PathBuf::new();
    for segment in path.split('/').filter(|s| !s.is_empty() && *s != ".") {
        if segment == ".." || segment.contains('\\') {
            return None;
        }
        relative.push(segment);
    }

    if relative.as_os_str().is_empty() {
        Some(Route::File(PathBuf::from("index.html")))
    } else {
        Some(Route::File(relative))
    }
}

pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("wasm") => "application/wasm",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("wgsl") | Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Status, content type and body for one request.
#[derive(Debug)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type,
            body,
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: message.as_bytes().to_vec(),
        }
    }
}

/// Web root plus the catalog document, validated once at start-up.
pub struct Site {
    root: PathBuf,
    data: String,
}

impl Site {
    pub fn load(root: impl Into<PathBuf>, data_path: &Path) -> Result<Self, ServerError> {
        let data = fs::read_to_string(data_path).map_err(|source| ServerError::DataRead {
            path: data_path.to_path_buf(),
            source,
        })?;
        serde_json::from_str::<serde_json::Value>(&data).map_err(|source| {
            ServerError::InvalidData {
                path: data_path.to_path_buf(),
                source,
            }
        })?;

        Ok(Self {
            root: root.into(),
            data,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Build the reply for a request. HEAD replies carry the body too;
    /// tiny_http omits it on the wire and keeps the length header.
    pub fn respond(&self, method: &Method, url: &str) -> Reply {
        if !matches!(method, Method::Get | Method::Head) {
            return Reply::error(405, "Method Not Allowed");
        }

        match resolve(url) {
            Some(Route::Data) => Reply::ok("application/json", self.data.clone().into_bytes()),
            Some(Route::File(relative)) => {
                let path = self.root.join(&relative);
                match fs::read(&path) {
                    Ok(body) => Reply::ok(content_type_for(&path), body),
                    Err(_) => Reply::error(404, "Not Found"),
                }
            }
            None => Reply::error(404, "Not Found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_site(name: &str) -> Site {
        let dir = std::env::temp_dir().join(format!(
            "showcase-server-{}-{}",
            name,
            std::process::id()
        ));
        let root = dir.join("web");
        fs::create_dir_all(root.join("previews")).expect("create scratch web root");
        fs::write(root.join("index.html"), "<canvas id=\"showcase\"></canvas>")
            .expect("write index");
        fs::write(root.join("previews").join("harbour.jpg"), [0xFF, 0xD8, 0xFF])
            .expect("write preview");
        fs::write(dir.join("secret.txt"), "outside the root").expect("write secret");

        let data = dir.join("get_data.json");
        fs::write(&data, r#"{ "projects": [] }"#).expect("write data");
        Site::load(root, &data).expect("valid site")
    }

    #[test]
    fn root_and_data_routes() {
        assert_eq!(resolve("/"), Some(Route::File(PathBuf::from("index.html"))));
        assert_eq!(resolve("/get_data"), Some(Route::Data));
        assert_eq!(resolve("/get_data?cache=1"), Some(Route::Data));
        assert_eq!(
            resolve("/previews/harbour.jpg#top"),
            Some(Route::File(PathBuf::from("previews/harbour.jpg")))
        );
    }

    #[test]
    fn traversal_is_rejected() {
        assert_eq!(resolve("/../secret.txt"), None);
        assert_eq!(resolve("/previews/../../secret.txt"), None);
        assert_eq!(resolve("/previews\\..\\secret.txt"), None);
    }

    #[test]
    fn content_types_follow_the_extension() {
        assert_eq!(content_type_for(Path::new("app_bg.wasm")), "application/wasm");
        assert_eq!(content_type_for(Path::new("a/B.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("unknown.bin")), "application/octet-stream");
    }

    #[test]
    fn serves_index_data_and_files() {
        let site = scratch_site("serves");

        let index = site.respond(&Method::Get, "/");
        assert_eq!(index.status, 200);
        assert!(index.content_type.starts_with("text/html"));

        let data = site.respond(&Method::Get, "/get_data");
        assert_eq!(data.status, 200);
        assert_eq!(data.content_type, "application/json");
        assert_eq!(data.body, br#"{ "projects": [] }"#.to_vec());

        let preview = site.respond(&Method::Head, "/previews/harbour.jpg");
        assert_eq!(preview.status, 200);
        assert_eq!(preview.content_type, "image/jpeg");
    }

    #[test]
    fn missing_escaping_and_unsupported_requests() {
        let site = scratch_site("errors");
        assert_eq!(site.respond(&Method::Get, "/missing.js").status, 404);
        assert_eq!(site.respond(&Method::Get, "/../secret.txt").status, 404);
        assert_eq!(site.respond(&Method::Get, "/previews").status, 404);
        assert_eq!(site.respond(&Method::Post, "/get_data").status, 405);
    }

    #[test]
    fn invalid_data_fails_at_load() {
        let dir = std::env::temp_dir().join(format!("showcase-server-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create scratch dir");
        let data = dir.join("get_data.json");
        fs::write(&data, "{ not json").expect("write data");

        assert!(matches!(
            Site::load(&dir, &data),
            Err(ServerError::InvalidData { .. })
        ));
        assert!(matches!(
            Site::load(&dir, &dir.join("absent.json")),
            Err(ServerError::DataRead { .. })
        ));
    }
}
