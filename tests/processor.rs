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
//! End-to-end checks of `UserDataProcessor` on Envoy request-headers messages.

use std::sync::Arc;
use userdata_callout::catalog::{CatalogNode, ItemKind, StaticCatalog};
use userdata_callout::envoy::{
    config::core::v3::{HeaderMap, HeaderValue},
    service::ext_proc::v3::{
        processing_request::Request as ProcessingRequestVariant,
        processing_response::Response as ProcessingResponseVariant, HttpHeaders,
        ProcessingRequest, ProcessingResponse,
    },
};
use userdata_callout::interceptor::Interceptor;
use userdata_callout::processor::{ExtProcessor, UserDataProcessor};
use userdata_callout::rules::RuleEvaluator;
use userdata_callout::scope::{RouteScope, STANDARD_ROUTES};
use userdata_callout::toggles::{ToggleSet, ToggleStore};
use uuid::Uuid;

const COLLECTIONS_FOLDER: &str = "9d7ad6afe9afa2dab1a2f6e00ad28fa6";

fn create_request_headers(path: &str) -> ProcessingRequest {
    ProcessingRequest {
        request: Some(ProcessingRequestVariant::RequestHeaders(HttpHeaders {
            headers: Some(HeaderMap {
                headers: vec![
                    HeaderValue {
                        key: ":method".to_string(),
                        raw_value: b"GET".to_vec(),
                        ..Default::default()
                    },
                    HeaderValue {
                        key: ":path".to_string(),
                        raw_value: path.as_bytes().to_vec(),
                        ..Default::default()
                    },
                    HeaderValue {
                        key: "host".to_string(),
                        raw_value: b"jellyfin.local".to_vec(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }),
            ..Default::default()
        })),
        ..Default::default()
    }
}

fn create_processor(store: Arc<ToggleStore>) -> UserDataProcessor {
    let catalog: StaticCatalog = vec![CatalogNode::new(
        Uuid::parse_str(COLLECTIONS_FOLDER).unwrap(),
        ItemKind::CollectionFolder,
    )]
    .into_iter()
    .collect();
    UserDataProcessor::new(
        Interceptor::new(RuleEvaluator::standard(), Arc::new(catalog)),
        store,
    )
}

/// The rewritten `:path`, or `None` when the response carries no mutation.
fn rewritten_path(response: &ProcessingResponse) -> Option<String> {
    let Some(ProcessingResponseVariant::RequestHeaders(headers_response)) = &response.response
    else {
        panic!("Expected RequestHeaders response, got {:?}", response.response);
    };
    let common = headers_response
        .response
        .as_ref()
        .expect("missing common response");
    common
        .header_mutation
        .as_ref()?
        .set_headers
        .iter()
        .filter_map(|option| option.header.as_ref())
        .find(|header| header.key == ":path")
        .map(|header| String::from_utf8_lossy(&header.raw_value).into_owned())
}

async fn process(store: Arc<ToggleStore>, path: &str) -> Option<String> {
    let response = create_processor(store)
        .process_request_headers(&create_request_headers(path))
        .await
        .expect("request headers must never fail");
    rewritten_path(&response)
}

#[tokio::test]
async fn test_seasons_request_is_rewritten() {
    let store = Arc::new(ToggleStore::new(ToggleSet {
        seasons: true,
        ..Default::default()
    }));
    let path = process(store, "/Shows/abc/Seasons?userId=42&fields=ItemCounts").await;
    assert_eq!(
        path.as_deref(),
        Some("/Shows/abc/Seasons?userId=42&fields=ItemCounts&enableUserData=false")
    );
}

#[tokio::test]
async fn test_existing_flag_is_replaced() {
    let store = Arc::new(ToggleStore::new(ToggleSet {
        next_up: true,
        ..Default::default()
    }));
    let path = process(store, "/Shows/NextUp?enableUserData=true&limit=24").await;
    assert_eq!(path.as_deref(), Some("/Shows/NextUp?limit=24&enableUserData=false"));
}

#[tokio::test]
async fn test_disabled_toggle_passes_through() {
    let store = Arc::new(ToggleStore::new(ToggleSet {
        all_items: true,
        ..Default::default()
    }));
    assert!(process(store, "/Shows/abc/Seasons?userId=42").await.is_none());
}

#[tokio::test]
async fn test_default_toggles_are_inert() {
    let store = Arc::new(ToggleStore::new(ToggleSet::default()));
    for path in [
        "/Items",
        "/Users/1/Items/Resume",
        "/Shows/NextUp",
        "/Items/Latest",
        "/Items?includeItemTypes=BoxSet",
    ] {
        assert!(process(store.clone(), path).await.is_none(), "path {}", path);
    }
}

#[tokio::test]
async fn test_no_configuration_passes_through() {
    let store = Arc::new(ToggleStore::empty());
    assert!(process(store, "/Items?recursive=true").await.is_none());
}

#[tokio::test]
async fn test_collections_by_parent_id() {
    let store = Arc::new(ToggleStore::new(ToggleSet {
        collections: true,
        ..Default::default()
    }));
    let path = format!("/Users/1/Items?parentId={}&sortBy=SortName", COLLECTIONS_FOLDER);
    let rewritten = process(store.clone(), &path).await;
    assert_eq!(rewritten, Some(format!("{}&enableUserData=false", path)));

    assert!(process(store, "/Users/1/Items?parentId=not-a-guid").await.is_none());
}

#[tokio::test]
async fn test_collections_by_item_type_in_list() {
    let store = Arc::new(ToggleStore::new(ToggleSet {
        collections: true,
        ..Default::default()
    }));
    let rewritten = process(store, "/Items?includeItemTypes=Movie%2CBoxSet%2CSeries").await;
    assert_eq!(
        rewritten.as_deref(),
        Some("/Items?includeItemTypes=Movie%2CBoxSet%2CSeries&enableUserData=false")
    );
}

#[tokio::test]
async fn test_out_of_scope_paths_pass_through() {
    let store = Arc::new(ToggleStore::new(ToggleSet::all()));
    for path in [
        format!("/Genres?parentId={}", COLLECTIONS_FOLDER),
        "/Items/Filters?includeItemTypes=BoxSet".to_string(),
        "/Search/Hints?includeItemTypes=BoxSet".to_string(),
        "/Shows/abc/Episodes?season=1".to_string(),
    ] {
        assert!(process(store.clone(), &path).await.is_none(), "path {}", path);
    }
}

#[tokio::test]
async fn test_scope_under_base_path() {
    let store = Arc::new(ToggleStore::new(ToggleSet {
        next_up: true,
        ..Default::default()
    }));
    let processor = create_processor(store)
        .with_scope(RouteScope::new("/jellyfin", STANDARD_ROUTES).unwrap());

    let mounted = processor
        .process_request_headers(&create_request_headers("/jellyfin/Shows/NextUp?limit=5"))
        .await
        .unwrap();
    assert_eq!(
        rewritten_path(&mounted).as_deref(),
        Some("/jellyfin/Shows/NextUp?limit=5&enableUserData=false")
    );

    let root = processor
        .process_request_headers(&create_request_headers("/Shows/NextUp?limit=5"))
        .await
        .unwrap();
    assert!(rewritten_path(&root).is_none());
}

#[tokio::test]
async fn test_encoded_path_keeps_raw_bytes() {
    let store = Arc::new(ToggleStore::new(ToggleSet {
        seasons: true,
        ..Default::default()
    }));
    let path = process(store, "/Shows/abc/Season%73?fields=A,B&flag&name=%FF&q=a%20b").await;
    assert_eq!(
        path.as_deref(),
        Some("/Shows/abc/Season%73?fields=A,B&flag&name=%FF&q=a%20b&enableUserData=false")
    );
}

#[tokio::test]
async fn test_toggle_replacement_applies_to_next_request() {
    let store = Arc::new(ToggleStore::new(ToggleSet::default()));
    let processor = create_processor(store.clone());
    let request = create_request_headers("/Users/1/Items/Latest");

    let before = processor.process_request_headers(&request).await.unwrap();
    assert!(rewritten_path(&before).is_none());

    store.replace(ToggleSet {
        recently_added: true,
        ..Default::default()
    });
    let after = processor.process_request_headers(&request).await.unwrap();
    assert_eq!(
        rewritten_path(&after).as_deref(),
        Some("/Users/1/Items/Latest?enableUserData=false")
    );
}

#[tokio::test]
async fn test_missing_path_header_passes_through() {
    let processor = create_processor(Arc::new(ToggleStore::new(ToggleSet::all())));
    let request = ProcessingRequest {
        request: Some(ProcessingRequestVariant::RequestHeaders(HttpHeaders::default())),
        ..Default::default()
    };
    let response = processor.process_request_headers(&request).await.unwrap();
    assert!(rewritten_path(&response).is_none());
}

#[tokio::test]
async fn test_other_phases_pass_through() {
    let processor = create_processor(Arc::new(ToggleStore::new(ToggleSet::all())));
    let empty = ProcessingRequest::default();

    let response = processor.process_response_headers(&empty).await.unwrap();
    assert!(matches!(
        response.response,
        Some(ProcessingResponseVariant::ResponseHeaders(_))
    ));
    let response = processor.process_request_body(&empty).await.unwrap();
    assert!(matches!(
        response.response,
        Some(ProcessingResponseVariant::RequestBody(_))
    ));
    let response = processor.process_response_body(&empty).await.unwrap();
    assert!(matches!(
        response.response,
        Some(ProcessingResponseVariant::ResponseBody(_))
    ));
}
