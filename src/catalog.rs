// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! # Catalog Module
//!
//! Lookup of media-server catalog nodes by identifier. The collections rule
//! only needs to know whether a `parentId` names a collection folder, so a
//! node carries nothing but its identifier and kind.
//!
//! Two lookups are provided:
//!
//! - [`StaticCatalog`], an in-memory map filled from the settings file
//! - [`JellyfinCatalog`], which asks the media server's item API over HTTP
//!
//! Neither caches nor retries.

use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::{header, Body, Client, Request, StatusCode, Uri};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Kind of a catalog node, as reported by the media server's `Type` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Library folder that holds box sets.
    CollectionFolder,
    BoxSet,
    Folder,
    Other(String),
}

impl From<&str> for ItemKind {
    fn from(value: &str) -> Self {
        match value {
            "CollectionFolder" => ItemKind::CollectionFolder,
            "BoxSet" => ItemKind::BoxSet,
            "Folder" => ItemKind::Folder,
            other => ItemKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogNode {
    pub id: Uuid,
    pub kind: ItemKind,
}

impl CatalogNode {
    pub fn new(id: Uuid, kind: ItemKind) -> Self {
        Self { id, kind }
    }

    pub fn is_collection_folder(&self) -> bool {
        self.kind == ItemKind::CollectionFolder
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Transport(String),
    #[error("Catalog lookup timed out after {0:?}")]
    Timeout(Duration),
    #[error("Catalog returned status {0}")]
    Status(u16),
    #[error("Catalog response could not be decoded: {0}")]
    Decode(String),
}

/// Point lookup against the catalog.
///
/// `Ok(None)` means the identifier is unknown.
#[async_trait]
pub trait CatalogLookup: Send + Sync + 'static {
    async fn lookup_by_id(&self, id: Uuid) -> Result<Option<CatalogNode>, CatalogError>;
}

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    nodes: HashMap<Uuid, CatalogNode>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: CatalogNode) {
        self.nodes.insert(node.id, node);
    }
}

impl FromIterator<CatalogNode> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = CatalogNode>>(iter: I) -> Self {
        let mut catalog = StaticCatalog::new();
        for node in iter {
            catalog.insert(node);
        }
        catalog
    }
}

#[async_trait]
impl CatalogLookup for StaticCatalog {
    async fn lookup_by_id(&self, id: Uuid) -> Result<Option<CatalogNode>, CatalogError> {
        Ok(self.nodes.get(&id).cloned())
    }
}

/// Looks items up through `GET {base_url}/Items?ids={id}`.
#[derive(Clone)]
pub struct JellyfinCatalog {
    client: Client<HttpConnector>,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ItemsPage {
    #[serde(default)]
    items: Vec<ItemSummary>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ItemSummary {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "Type")]
    kind: String,
}

impl JellyfinCatalog {
    pub fn new(base_url: String, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout,
        }
    }

    fn items_uri(&self, id: Uuid) -> Result<Uri, CatalogError> {
        format!("{}/Items?ids={}", self.base_url, id.simple())
            .parse::<Uri>()
            .map_err(|e| CatalogError::Transport(e.to_string()))
    }

    async fn fetch(&self, id: Uuid) -> Result<(StatusCode, hyper::body::Bytes), CatalogError> {
        let mut builder = Request::get(self.items_uri(id)?).header(header::ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            builder = builder.header("X-Emby-Token", key);
        }
        let request = builder
            .body(Body::empty())
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let exchange = async {
            let response = self.client.request(request).await?;
            let status = response.status();
            let body = hyper::body::to_bytes(response.into_body()).await?;
            Ok::<_, hyper::Error>((status, body))
        };

        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| CatalogError::Timeout(self.timeout))?
            .map_err(|e| CatalogError::Transport(e.to_string()))
    }
}

#[async_trait]
impl CatalogLookup for JellyfinCatalog {
    async fn lookup_by_id(&self, id: Uuid) -> Result<Option<CatalogNode>, CatalogError> {
        let (status, body) = self.fetch(id).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }
        let node = parse_items_page(id, &body)?;
        debug!("Catalog lookup for {} returned {:?}", id, node);
        Ok(node)
    }
}

/// Picks the item matching `id` out of an items page. Items without an `Id`
/// are assumed to be the requested one.
fn parse_items_page(id: Uuid, body: &[u8]) -> Result<Option<CatalogNode>, CatalogError> {
    let page: ItemsPage =
        serde_json::from_slice(body).map_err(|e| CatalogError::Decode(e.to_string()))?;
    Ok(page
        .items
        .into_iter()
        .find(|item| match &item.id {
            Some(raw) => Uuid::parse_str(raw).map_or(false, |parsed| parsed == id),
            None => true,
        })
        .map(|item| CatalogNode::new(id, ItemKind::from(item.kind.as_str()))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::service::{make_service_fn, service_fn};
    use hyper::{Response, Server};
    use std::convert::Infallible;
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const BOXSETS: &str = "9d7ad6af-e9af-a2da-b1a2-f6e00ad28fa6";

    /// Serves every request with `status` and `body` after `delay`, counting hits.
    async fn spawn_catalog_server(
        status: StatusCode,
        body: &'static str,
        delay: Duration,
    ) -> (SocketAddr, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let make_service = make_service_fn(move |_| {
            let counter = counter.clone();
            async move {
                Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        assert_eq!(req.uri().path(), "/Items");
                        tokio::time::sleep(delay).await;
                        let mut response = Response::new(Body::from(body));
                        *response.status_mut() = status;
                        Ok::<_, Infallible>(response)
                    }
                }))
            }
        });

        let server = Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make_service);
        let addr = server.local_addr();
        tokio::spawn(server);
        (addr, hits)
    }

    fn boxsets_id() -> Uuid {
        Uuid::parse_str(BOXSETS).unwrap()
    }

    #[test]
    fn test_item_kind_from_type_name() {
        assert_eq!(ItemKind::from("CollectionFolder"), ItemKind::CollectionFolder);
        assert_eq!(ItemKind::from("BoxSet"), ItemKind::BoxSet);
        assert_eq!(ItemKind::from("Series"), ItemKind::Other("Series".to_string()));
    }

    #[tokio::test]
    async fn test_static_catalog_lookup() {
        let catalog: StaticCatalog = vec![CatalogNode::new(boxsets_id(), ItemKind::CollectionFolder)]
            .into_iter()
            .collect();

        let node = catalog.lookup_by_id(boxsets_id()).await.unwrap().unwrap();
        assert!(node.is_collection_folder());
        assert!(catalog.lookup_by_id(Uuid::nil()).await.unwrap().is_none());
    }

    #[test]
    fn test_parse_items_page_matches_id() {
        let body = format!(
            r#"{{"Items": [{{"Id": "00000000000000000000000000000001", "Type": "Movie"}}, {{"Id": "{}", "Type": "CollectionFolder"}}], "TotalRecordCount": 2}}"#,
            boxsets_id().simple()
        );
        let node = parse_items_page(boxsets_id(), body.as_bytes()).unwrap().unwrap();
        assert_eq!(node.kind, ItemKind::CollectionFolder);
    }

    #[test]
    fn test_parse_items_page_empty_and_invalid() {
        assert!(parse_items_page(boxsets_id(), br#"{"Items": []}"#).unwrap().is_none());
        assert!(matches!(
            parse_items_page(boxsets_id(), b"<html>"),
            Err(CatalogError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_jellyfin_catalog_lookup() {
        let (addr, hits) = spawn_catalog_server(
            StatusCode::OK,
            r#"{"Items": [{"Type": "CollectionFolder"}]}"#,
            Duration::ZERO,
        )
        .await;
        let catalog = JellyfinCatalog::new(format!("http://{}/", addr), Some("key".to_string()), Duration::from_secs(5));

        let node = catalog.lookup_by_id(boxsets_id()).await.unwrap().unwrap();
        assert!(node.is_collection_folder());
        assert_eq!(node.id, boxsets_id());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_jellyfin_catalog_not_found_and_errors() {
        let (addr, _) = spawn_catalog_server(StatusCode::NOT_FOUND, "", Duration::ZERO).await;
        let catalog = JellyfinCatalog::new(format!("http://{}", addr), None, Duration::from_secs(5));
        assert!(catalog.lookup_by_id(boxsets_id()).await.unwrap().is_none());

        let (addr, hits) = spawn_catalog_server(StatusCode::INTERNAL_SERVER_ERROR, "", Duration::ZERO).await;
        let catalog = JellyfinCatalog::new(format!("http://{}", addr), None, Duration::from_secs(5));
        assert!(matches!(
            catalog.lookup_by_id(boxsets_id()).await,
            Err(CatalogError::Status(500))
        ));
        // No retries.
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_jellyfin_catalog_timeout() {
        let (addr, _) = spawn_catalog_server(
            StatusCode::OK,
            r#"{"Items": []}"#,
            Duration::from_secs(2),
        )
        .await;
        let catalog = JellyfinCatalog::new(format!("http://{}", addr), None, Duration::from_millis(50));
        assert!(matches!(
            catalog.lookup_by_id(boxsets_id()).await,
            Err(CatalogError::Timeout(_))
        ));
    }
}
