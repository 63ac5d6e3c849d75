use std::sync::{Arc, Mutex};

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::project_catalog::{CatalogError, ProjectCatalog};
use crate::engine::core::app_state::AppState;
use crate::rpc::web_rpc::WebRpcInterface;

/// Served by the page server next to the canvas.
pub const CATALOG_URL: &str = "/get_data";

/// Copied into the asset folder by the build script for native runs.
pub const CATALOG_ASSET_PATH: &str = "data/projects.json";

/// Why loading stopped; kept for the loading screen.
#[derive(Resource, Debug, Clone)]
pub struct LoadingError(pub String);

type FetchSlot = Arc<Mutex<Option<Result<String, String>>>>;

/// Tracks the catalog request, whichever way it was made.
#[derive(Resource, Default)]
pub struct CatalogLoader {
    handle: Option<Handle<ProjectCatalog>>,
    fetched: FetchSlot,
}

impl CatalogLoader {
    /// Hand over a fetched response body, or the reason the fetch failed.
    pub fn deliver(&self, result: Result<String, String>) {
        if let Ok(mut slot) = self.fetched.lock() {
            *slot = Some(result);
        }
    }

    /// Parse a delivered response. `None` until something was delivered.
    pub fn take_fetched(&self) -> Option<Result<ProjectCatalog, CatalogError>> {
        let delivered = self.fetched.lock().ok()?.take()?;
        Some(
            delivered
                .map_err(CatalogError::Fetch)
                .and_then(|text| ProjectCatalog::from_json(&text)),
        )
    }

    /// Outcome of the request; `None` while it is still pending.
    pub fn poll(
        &self,
        asset_server: &AssetServer,
        catalogs: &Assets<ProjectCatalog>,
    ) -> Option<Result<ProjectCatalog, CatalogError>> {
        if let Some(outcome) = self.take_fetched() {
            return Some(outcome);
        }

        let handle = self.handle.as_ref()?;
        if let Some(catalog) = catalogs.get(handle) {
            return Some(catalog.validate().map(|()| catalog.clone()));
        }
        if let LoadState::Failed(err) = asset_server.load_state(handle) {
            return Some(Err(CatalogError::AssetLoad(err.to_string())));
        }
        None
    }
}

/// Request the catalog: `/get_data` on the web, the bundled JSON asset natively.
#[cfg_attr(target_arch = "wasm32", allow(unused_mut, unused_variables))]
pub fn start_loading(mut loader: ResMut<CatalogLoader>, asset_server: Res<AssetServer>) {
    #[cfg(target_arch = "wasm32")]
    {
        info!("Fetching project catalog from {}", CATALOG_URL);
        spawn_catalog_fetch(loader.fetched.clone());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        info!("Loading project catalog from {}", CATALOG_ASSET_PATH);
        loader.handle = Some(asset_server.load(CATALOG_ASSET_PATH));
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn_catalog_fetch(slot: FetchSlot) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_text(CATALOG_URL).await;
        if let Ok(mut pending) = slot.lock() {
            *pending = Some(result);
        }
    });
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or("window object not available")?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("{:?}", e))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch did not resolve to a Response".to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {} from {}", response.status(), url));
    }

    let body = response.text().map_err(|e| format!("{:?}", e))?;
    let text = JsFuture::from(body).await.map_err(|e| format!("{:?}", e))?;
    text.as_string()
        .ok_or_else(|| "response body is not text".to_string())
}

/// Move to `Running` with the catalog as a resource, or to `LoadFailed`.
pub fn poll_catalog(
    mut commands: Commands,
    loader: Res<CatalogLoader>,
    asset_server: Res<AssetServer>,
    catalogs: Res<Assets<ProjectCatalog>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    match loader.poll(&asset_server, &catalogs) {
        None => {}
        Some(Ok(catalog)) => {
            info!("Project catalog loaded: {} projects", catalog.len());
            commands.insert_resource(catalog);
            next_state.set(AppState::Running);
        }
        Some(Err(err)) => {
            error!("Project catalog unavailable: {}", err);
            commands.insert_resource(LoadingError(err.to_string()));
            next_state.set(AppState::LoadFailed);
        }
    }
}

pub fn announce_catalog(catalog: Res<ProjectCatalog>, mut rpc: ResMut<WebRpcInterface>) {
    rpc.send_notification(
        "catalog_loaded",
        serde_json::json!({ "count": catalog.len() }),
    );
}

pub fn announce_loading_failure(error: Res<LoadingError>, mut rpc: ResMut<WebRpcInterface>) {
    rpc.send_notification(
        "loading_failed",
        serde_json::json!({ "message": error.0 }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_delivered_is_pending() {
        let loader = CatalogLoader::default();
        assert!(loader.take_fetched().is_none());
    }

    #[test]
    fn delivered_body_is_parsed_once() {
        let loader = CatalogLoader::default();
        loader.deliver(Ok(r#"{ "projects": [ {
            "model": "harbour", "title": "Harbour Chair", "preview": "previews/harbour.jpg",
            "geometry": { "width": 640, "height": 480, "x": 0, "y": 0 }
        } ] }"#
            .to_string()));

        let catalog = loader
            .take_fetched()
            .expect("delivered")
            .expect("valid catalog");
        assert_eq!(catalog.len(), 1);
        assert!(loader.take_fetched().is_none());
    }

    #[test]
    fn fetch_failure_becomes_a_catalog_error() {
        let loader = CatalogLoader::default();
        loader.deliver(Err("HTTP 500 from /get_data".to_string()));
        assert!(matches!(
            loader.take_fetched(),
            Some(Err(CatalogError::Fetch(message))) if message.contains("500")
        ));
    }

    #[test]
    fn invalid_body_becomes_a_parse_error() {
        let loader = CatalogLoader::default();
        loader.deliver(Ok("<html>not json</html>".to_string()));
        assert!(matches!(loader.take_fetched(), Some(Err(CatalogError::Parse(_)))));
    }
}
