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
//! # Interceptor Module
//!
//! Glue between one in-flight request and the [`RuleEvaluator`]: decide, mark
//! the forwarded arguments when user data should be dropped, then always
//! hand over to the next stage.

use crate::catalog::CatalogLookup;
use crate::descriptor::{split_path, RequestDescriptor};
use crate::rules::{Decision, RuleEvaluator};
use crate::toggles::ToggleSet;
use futures::FutureExt;
use log::{debug, error};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use url::form_urlencoded;

/// Handler argument that controls whether per-user data is computed.
pub const ENABLE_USER_DATA: &str = "enableUserData";

/// Arguments that will be forwarded to the request handler.
///
/// Each `&`-separated query segment is kept verbatim; only its name is
/// decoded for lookups. A rewrite touches nothing but the `enableUserData`
/// pair, so every other argument reaches the handler byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedArguments {
    segments: Vec<QuerySegment>,
    modified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct QuerySegment {
    raw: String,
    name: String,
    value: String,
}

impl QuerySegment {
    fn parse(raw: &str) -> Self {
        let (name, value) = form_urlencoded::parse(raw.as_bytes())
            .next()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .unwrap_or_default();
        Self {
            raw: raw.to_string(),
            name,
            value,
        }
    }
}

impl ForwardedArguments {
    pub fn from_query(query: &str) -> Self {
        Self {
            segments: query
                .split('&')
                .filter(|segment| !segment.is_empty())
                .map(QuerySegment::parse)
                .collect(),
            modified: false,
        }
    }

    /// Arguments carried by the query part of a raw request target.
    pub fn from_path(raw: &str) -> Self {
        Self::from_query(split_path(raw).1)
    }

    /// Decoded value of the first argument called `name`.
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.segments
            .iter()
            .find(|segment| segment.name == name)
            .map(|segment| segment.value.as_str())
    }

    /// Sets `enableUserData=false`, dropping any earlier value under any
    /// spelling of the name since the handler binds it case-insensitively.
    pub fn disable_user_data(&mut self) {
        self.segments
            .retain(|segment| !segment.name.eq_ignore_ascii_case(ENABLE_USER_DATA));
        self.segments
            .push(QuerySegment::parse(&format!("{}=false", ENABLE_USER_DATA)));
        self.modified = true;
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn to_query_string(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.raw.as_str())
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `path` followed by these arguments as its query string.
    pub fn to_request_target(&self, path: &str) -> String {
        if self.segments.is_empty() {
            return path.to_string();
        }
        format!("{}?{}", path, self.to_query_string())
    }
}

pub struct Interceptor {
    evaluator: RuleEvaluator,
    catalog: Arc<dyn CatalogLookup>,
}

impl Interceptor {
    pub fn new(evaluator: RuleEvaluator, catalog: Arc<dyn CatalogLookup>) -> Self {
        Self { evaluator, catalog }
    }

    /// Runs the rules for `request` and invokes `next` exactly once.
    ///
    /// When a rule fires, `args` gets `enableUserData=false` before `next`
    /// runs. Without toggles the rules are skipped. A panic while deciding is
    /// logged and treated as no match.
    pub async fn intercept<F, T>(
        &self,
        request: &RequestDescriptor,
        toggles: Option<&ToggleSet>,
        args: &mut ForwardedArguments,
        next: F,
    ) -> T
    where
        F: FnOnce(&ForwardedArguments) -> T,
    {
        let decision = match toggles {
            Some(toggles) => self.decide(request, toggles).await,
            None => {
                debug!("No toggle configuration loaded, passing {} through", request.path());
                Decision::pass_through()
            }
        };

        if decision.suppress() {
            args.disable_user_data();
        } else {
            debug!("Not disabling user data for path {}", request.path());
        }

        next(args)
    }

    async fn decide(&self, request: &RequestDescriptor, toggles: &ToggleSet) -> Decision {
        debug!("Intercepting path {} to see whether to disable user data", request.path());
        let evaluation = self
            .evaluator
            .decide(request, toggles, self.catalog.as_ref());
        match AssertUnwindSafe(evaluation).catch_unwind().await {
            Ok(decision) => decision,
            Err(panic) => {
                error!(
                    "Rule evaluation panicked for path {}: {}",
                    request.path(),
                    panic_message(panic.as_ref())
                );
                Decision::pass_through()
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, CatalogNode, StaticCatalog};
    use crate::rules::{PathSuffixRule, RuleKind};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct PanickingCatalog;

    #[async_trait]
    impl CatalogLookup for PanickingCatalog {
        async fn lookup_by_id(&self, _id: Uuid) -> Result<Option<CatalogNode>, CatalogError> {
            panic!("catalog index unavailable");
        }
    }

    fn interceptor() -> Interceptor {
        Interceptor::new(RuleEvaluator::standard(), Arc::new(StaticCatalog::new()))
    }

    fn seasons_only() -> ToggleSet {
        ToggleSet {
            seasons: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_disable_user_data_replaces_existing_value() {
        let mut args = ForwardedArguments::from_query("fields=Overview&EnableUserData=true&enableUserData=true&limit=5");
        args.disable_user_data();
        assert!(args.is_modified());
        assert_eq!(args.get(ENABLE_USER_DATA), Some("false"));
        assert_eq!(args.to_query_string(), "fields=Overview&limit=5&enableUserData=false");
    }

    #[test]
    fn test_request_target_round_trip() {
        let args = ForwardedArguments::from_path("/Shows/abc/Seasons?userId=1&fields=A%2CB");
        assert_eq!(args.to_request_target("/Shows/abc/Seasons"), "/Shows/abc/Seasons?userId=1&fields=A%2CB");
        assert_eq!(ForwardedArguments::default().to_request_target("/Items"), "/Items");
    }

    #[test]
    fn test_rewrite_keeps_other_arguments_verbatim() {
        let mut args = ForwardedArguments::from_query("fields=A,B&flag&name=%FF&q=a%20b");
        assert_eq!(args.get("q"), Some("a b"));
        assert_eq!(args.get("flag"), Some(""));
        args.disable_user_data();
        assert_eq!(
            args.to_request_target("/Items"),
            "/Items?fields=A,B&flag&name=%FF&q=a%20b&enableUserData=false"
        );
    }

    #[test]
    fn test_encoded_flag_name_is_replaced() {
        let mut args = ForwardedArguments::from_query("enable%55serData=true&limit=5&&");
        args.disable_user_data();
        assert_eq!(args.to_query_string(), "limit=5&enableUserData=false");
    }

    #[tokio::test]
    async fn test_intercept_sets_flag_before_next() {
        let request = RequestDescriptor::from_path("/Shows/abc/Seasons");
        let mut args = ForwardedArguments::default();
        let mut calls = 0;

        let seen = interceptor()
            .intercept(&request, Some(&seasons_only()), &mut args, |args| {
                calls += 1;
                args.get(ENABLE_USER_DATA).map(str::to_string)
            })
            .await;

        assert_eq!(calls, 1);
        assert_eq!(seen.as_deref(), Some("false"));
        assert_eq!(args.get(ENABLE_USER_DATA), Some("false"));
    }

    #[tokio::test]
    async fn test_intercept_leaves_unmatched_requests_alone() {
        let request = RequestDescriptor::from_path("/Shows/abc/Episodes?enableUserData=true");
        let mut args = ForwardedArguments::from_path("/Shows/abc/Episodes?enableUserData=true");
        let mut calls = 0;

        interceptor()
            .intercept(&request, Some(&ToggleSet::all()), &mut args, |_| calls += 1)
            .await;

        assert_eq!(calls, 1);
        assert!(!args.is_modified());
        assert_eq!(args.get(ENABLE_USER_DATA), Some("true"));
    }

    #[tokio::test]
    async fn test_intercept_without_toggles_fails_open() {
        let request = RequestDescriptor::from_path("/Items");
        let mut args = ForwardedArguments::default();
        let mut calls = 0;

        interceptor()
            .intercept(&request, None, &mut args, |_| calls += 1)
            .await;

        assert_eq!(calls, 1);
        assert!(!args.is_modified());
    }

    #[tokio::test]
    async fn test_intercept_survives_panicking_catalog() {
        let interceptor = Interceptor::new(RuleEvaluator::standard(), Arc::new(PanickingCatalog));
        let request = RequestDescriptor::from_path("/Items?parentId=9d7ad6afe9afa2dab1a2f6e00ad28fa6");
        let toggles = ToggleSet {
            collections: true,
            ..Default::default()
        };
        let mut args = ForwardedArguments::default();
        let mut calls = 0;

        interceptor
            .intercept(&request, Some(&toggles), &mut args, |_| calls += 1)
            .await;

        assert_eq!(calls, 1);
        assert!(!args.is_modified());
    }

    #[tokio::test]
    async fn test_intercept_with_custom_rules() {
        let interceptor = Interceptor::new(
            RuleEvaluator::new(vec![Box::new(PathSuffixRule::new(RuleKind::NextUp, "/Upcoming"))]),
            Arc::new(StaticCatalog::new()),
        );
        let request = RequestDescriptor::from_path("/Shows/Upcoming");
        let toggles = ToggleSet {
            next_up: true,
            ..Default::default()
        };
        let mut args = ForwardedArguments::default();

        let modified = interceptor
            .intercept(&request, Some(&toggles), &mut args, ForwardedArguments::is_modified)
            .await;
        assert!(modified);
    }

    #[test]
    fn test_panic_message() {
        let boxed: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(boxed.as_ref()), "boom");
        let boxed: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(boxed.as_ref()), "bang");
        let boxed: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(boxed.as_ref()), "unknown panic");
    }
}
