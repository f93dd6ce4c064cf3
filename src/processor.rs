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
use crate::descriptor::{split_path, RequestDescriptor};
use crate::envoy::service::ext_proc::v3::{
    processing_request::Request as ProcessingRequestVariant, HttpHeaders, ProcessingRequest,
    ProcessingResponse,
};
use crate::interceptor::{ForwardedArguments, Interceptor};
use crate::scope::RouteScope;
use crate::toggles::ToggleStore;
use crate::utils::mutations::{self, PATH_HEADER};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Processing failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait ExtProcessor: Send + Sync + 'static {
    async fn process_request_headers(
        &self,
        req: &ProcessingRequest,
    ) -> Result<ProcessingResponse, ProcessingError>;
    async fn process_response_headers(
        &self,
        req: &ProcessingRequest,
    ) -> Result<ProcessingResponse, ProcessingError>;
    async fn process_request_body(
        &self,
        req: &ProcessingRequest,
    ) -> Result<ProcessingResponse, ProcessingError>;
    async fn process_response_body(
        &self,
        req: &ProcessingRequest,
    ) -> Result<ProcessingResponse, ProcessingError>;
}

/// Rewrites `:path` to carry `enableUserData=false` when the request hits a
/// route in scope and an enabled rule matches it; lets everything else
/// through untouched.
#[derive(Clone)]
pub struct UserDataProcessor {
    interceptor: Arc<Interceptor>,
    toggles: Arc<ToggleStore>,
    scope: Arc<RouteScope>,
}

impl UserDataProcessor {
    /// Uses [`RouteScope::standard`]; see [`with_scope`](Self::with_scope).
    pub fn new(interceptor: Interceptor, toggles: Arc<ToggleStore>) -> Self {
        Self {
            interceptor: Arc::new(interceptor),
            toggles,
            scope: Arc::new(RouteScope::standard()),
        }
    }

    pub fn with_scope(mut self, scope: RouteScope) -> Self {
        self.scope = Arc::new(scope);
        self
    }
}

/// Value of the `:path` pseudo-header, if present and valid UTF-8.
fn request_path(headers: &HttpHeaders) -> Option<String> {
    let header = headers
        .headers
        .as_ref()?
        .headers
        .iter()
        .find(|header| header.key == PATH_HEADER)?;
    if !header.value.is_empty() {
        return Some(header.value.clone());
    }
    String::from_utf8(header.raw_value.clone()).ok()
}

#[async_trait]
impl ExtProcessor for UserDataProcessor {
    async fn process_request_headers(
        &self,
        req: &ProcessingRequest,
    ) -> Result<ProcessingResponse, ProcessingError> {
        let Some(ProcessingRequestVariant::RequestHeaders(headers)) = &req.request else {
            return Ok(mutations::pass_through_headers(true));
        };
        let Some(raw_path) = request_path(headers) else {
            debug!("Request has no usable :path header, passing through");
            return Ok(mutations::pass_through_headers(true));
        };

        let request = RequestDescriptor::from_path(&raw_path);
        if !self.scope.contains(request.path()) {
            debug!("Path {} is out of scope, passing through", request.path());
            return Ok(mutations::pass_through_headers(true));
        }

        let target_path = split_path(&raw_path).0;
        let mut args = ForwardedArguments::from_path(&raw_path);
        let toggles = self.toggles.snapshot();

        let response = self
            .interceptor
            .intercept(&request, toggles.as_deref(), &mut args, |args| {
                if args.is_modified() {
                    mutations::set_path_mutation(args.to_request_target(target_path))
                } else {
                    mutations::pass_through_headers(true)
                }
            })
            .await;
        Ok(response)
    }

    async fn process_response_headers(
        &self,
        _req: &ProcessingRequest,
    ) -> Result<ProcessingResponse, ProcessingError> {
        Ok(mutations::pass_through_headers(false))
    }

    async fn process_request_body(
        &self,
        _req: &ProcessingRequest,
    ) -> Result<ProcessingResponse, ProcessingError> {
        Ok(mutations::pass_through_body(true))
    }

    async fn process_response_body(
        &self,
        _req: &ProcessingRequest,
    ) -> Result<ProcessingResponse, ProcessingError> {
        Ok(mutations::pass_through_body(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, CatalogLookup, CatalogNode};
    use crate::envoy::config::core::v3::{HeaderMap, HeaderValue};
    use crate::envoy::service::ext_proc::v3::processing_response::Response as ProcessingResponseVariant;
    use crate::rules::RuleEvaluator;
    use crate::toggles::ToggleSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    #[derive(Default)]
    struct CountingCatalog {
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl CatalogLookup for CountingCatalog {
        async fn lookup_by_id(&self, _id: Uuid) -> Result<Option<CatalogNode>, CatalogError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }
    }

    fn path_request(path: &str) -> ProcessingRequest {
        ProcessingRequest {
            request: Some(ProcessingRequestVariant::RequestHeaders(headers_with(vec![
                HeaderValue {
                    key: PATH_HEADER.to_string(),
                    raw_value: path.as_bytes().to_vec(),
                    ..Default::default()
                },
            ]))),
            ..Default::default()
        }
    }

    fn has_mutation(response: &ProcessingResponse) -> bool {
        match &response.response {
            Some(ProcessingResponseVariant::RequestHeaders(headers)) => headers
                .response
                .as_ref()
                .map_or(false, |common| common.header_mutation.is_some()),
            other => panic!("Expected RequestHeaders response, got {:?}", other),
        }
    }

    fn headers_with(entries: Vec<HeaderValue>) -> HttpHeaders {
        HttpHeaders {
            headers: Some(HeaderMap {
                headers: entries,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_request_path_prefers_value() {
        let headers = headers_with(vec![HeaderValue {
            key: ":path".to_string(),
            value: "/Items".to_string(),
            raw_value: b"/ignored".to_vec(),
            ..Default::default()
        }]);
        assert_eq!(request_path(&headers).as_deref(), Some("/Items"));
    }

    #[test]
    fn test_request_path_falls_back_to_raw_value() {
        let headers = headers_with(vec![
            HeaderValue {
                key: "host".to_string(),
                raw_value: b"jellyfin.local".to_vec(),
                ..Default::default()
            },
            HeaderValue {
                key: ":path".to_string(),
                raw_value: b"/Shows/NextUp".to_vec(),
                ..Default::default()
            },
        ]);
        assert_eq!(request_path(&headers).as_deref(), Some("/Shows/NextUp"));
    }

    #[test]
    fn test_request_path_missing_or_invalid() {
        assert!(request_path(&HttpHeaders::default()).is_none());
        let headers = headers_with(vec![HeaderValue {
            key: ":path".to_string(),
            raw_value: vec![0xff, 0xfe],
            ..Default::default()
        }]);
        assert!(request_path(&headers).is_none());
    }

    #[tokio::test]
    async fn test_out_of_scope_request_skips_catalog() {
        let catalog = Arc::new(CountingCatalog::default());
        let processor = UserDataProcessor::new(
            Interceptor::new(RuleEvaluator::standard(), catalog.clone()),
            Arc::new(ToggleStore::new(ToggleSet {
                collections: true,
                ..Default::default()
            })),
        );
        let folder = "9d7ad6af-e9af-a2da-b1a2-f6e00ad28fa6";

        let genres = processor
            .process_request_headers(&path_request(&format!("/Genres?parentId={}", folder)))
            .await
            .unwrap();
        assert!(!has_mutation(&genres));
        assert_eq!(catalog.lookups.load(Ordering::SeqCst), 0);

        // In scope, but the folder is unknown: looked up once, no match.
        let items = processor
            .process_request_headers(&path_request(&format!("/Users/1/Items?parentId={}", folder)))
            .await
            .unwrap();
        assert!(!has_mutation(&items));
        assert_eq!(catalog.lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_custom_scope_replaces_standard_routes() {
        let processor = UserDataProcessor::new(
            Interceptor::new(RuleEvaluator::standard(), Arc::new(CountingCatalog::default())),
            Arc::new(ToggleStore::new(ToggleSet::all())),
        )
        .with_scope(RouteScope::new("", ["/Custom/Items"]).unwrap());

        let custom = processor
            .process_request_headers(&path_request("/Custom/Items"))
            .await
            .unwrap();
        assert!(has_mutation(&custom));

        let standard = processor
            .process_request_headers(&path_request("/Shows/NextUp"))
            .await
            .unwrap();
        assert!(!has_mutation(&standard));
    }
}
