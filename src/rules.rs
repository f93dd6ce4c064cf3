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
//! # Rules Module
//!
//! Decides whether a request should have its per-user data suppressed.
//!
//! Each endpoint category is a [`Rule`]. The [`RuleEvaluator`] walks its
//! rules in a fixed order, skips those whose toggle is off, and stops at the
//! first match. Most rules identify their endpoint by path suffix; the
//! collections rule looks at the query instead and may ask the catalog
//! about `parentId`.
//!
//! Suffix matching is approximate: `/Items` matches every path ending in
//! `/Items`, not only the listing endpoints the toggle is meant for.

use crate::catalog::CatalogLookup;
use crate::descriptor::RequestDescriptor;
use crate::toggles::ToggleSet;
use async_trait::async_trait;
use log::{debug, info, warn};
use std::fmt;
use uuid::Uuid;

pub const INCLUDE_ITEM_TYPES: &str = "includeItemTypes";
pub const PARENT_ID: &str = "parentId";
pub const BOX_SET: &str = "BoxSet";

/// Endpoint categories, one per toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    AllItems,
    Collections,
    ContinueWatching,
    NextUp,
    RecentlyAdded,
    Seasons,
}

impl RuleKind {
    /// Evaluation order of the standard rule set.
    pub const ORDER: [RuleKind; 6] = [
        RuleKind::AllItems,
        RuleKind::Collections,
        RuleKind::ContinueWatching,
        RuleKind::NextUp,
        RuleKind::RecentlyAdded,
        RuleKind::Seasons,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RuleKind::AllItems => "all items",
            RuleKind::Collections => "collections",
            RuleKind::ContinueWatching => "continue watching",
            RuleKind::NextUp => "next up",
            RuleKind::RecentlyAdded => "recently added",
            RuleKind::Seasons => "seasons",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A way of recognising one endpoint category.
#[async_trait]
pub trait Rule: Send + Sync {
    fn kind(&self) -> RuleKind;

    async fn matches(&self, request: &RequestDescriptor, catalog: &dyn CatalogLookup) -> bool;
}

/// Matches when the request path ends with `suffix`, ignoring ASCII case.
#[derive(Debug, Clone, Copy)]
pub struct PathSuffixRule {
    kind: RuleKind,
    suffix: &'static str,
}

impl PathSuffixRule {
    pub const fn new(kind: RuleKind, suffix: &'static str) -> Self {
        Self { kind, suffix }
    }
}

#[async_trait]
impl Rule for PathSuffixRule {
    fn kind(&self) -> RuleKind {
        self.kind
    }

    async fn matches(&self, request: &RequestDescriptor, _catalog: &dyn CatalogLookup) -> bool {
        ends_with_ignore_ascii_case(request.path(), self.suffix)
    }
}

fn ends_with_ignore_ascii_case(path: &str, suffix: &str) -> bool {
    let (path, suffix) = (path.as_bytes(), suffix.as_bytes());
    path.len() >= suffix.len() && path[path.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Box-set listings: either `includeItemTypes` asks for `BoxSet`, or
/// `parentId` names a collection folder in the catalog. The query check
/// runs first so the catalog is only consulted when it has to be.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionsRule;

impl CollectionsRule {
    fn includes_box_sets(request: &RequestDescriptor) -> bool {
        request
            .query_values(INCLUDE_ITEM_TYPES)
            .iter()
            .flat_map(|value| value.split(','))
            .any(|item_type| item_type.trim() == BOX_SET)
    }

    async fn parent_is_collection_folder(
        request: &RequestDescriptor,
        catalog: &dyn CatalogLookup,
    ) -> bool {
        let Some(raw) = request.first_query_value(PARENT_ID) else {
            return false;
        };
        let Ok(parent_id) = Uuid::parse_str(raw) else {
            debug!("Ignoring malformed parentId {:?}", raw);
            return false;
        };

        match catalog.lookup_by_id(parent_id).await {
            Ok(Some(node)) => node.is_collection_folder(),
            Ok(None) => false,
            Err(e) => {
                warn!("Catalog lookup for parentId {} failed: {}", parent_id, e);
                false
            }
        }
    }
}

#[async_trait]
impl Rule for CollectionsRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Collections
    }

    async fn matches(&self, request: &RequestDescriptor, catalog: &dyn CatalogLookup) -> bool {
        if Self::includes_box_sets(request) {
            debug!("{} requested explicitly at path {}", BOX_SET, request.path());
            return true;
        }
        if Self::parent_is_collection_folder(request, catalog).await {
            debug!("Parent is a collection folder at path {}", request.path());
            return true;
        }
        false
    }
}

/// Outcome of evaluating one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decision {
    matched: Option<RuleKind>,
}

impl Decision {
    pub fn pass_through() -> Self {
        Self { matched: None }
    }

    pub fn suppress_for(kind: RuleKind) -> Self {
        Self {
            matched: Some(kind),
        }
    }

    pub fn suppress(&self) -> bool {
        self.matched.is_some()
    }

    /// The rule that fired, if any.
    pub fn rule(&self) -> Option<RuleKind> {
        self.matched
    }
}

pub struct RuleEvaluator {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleEvaluator {
    /// Evaluates `rules` in the given order.
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// The six media-server rules in [`RuleKind::ORDER`].
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(PathSuffixRule::new(RuleKind::AllItems, "/Items")),
            Box::new(CollectionsRule),
            Box::new(PathSuffixRule::new(RuleKind::ContinueWatching, "/Resume")),
            Box::new(PathSuffixRule::new(RuleKind::NextUp, "/NextUp")),
            Box::new(PathSuffixRule::new(RuleKind::RecentlyAdded, "/Latest")),
            Box::new(PathSuffixRule::new(RuleKind::Seasons, "/Seasons")),
        ])
    }

    pub fn rule_kinds(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.rules.iter().map(|rule| rule.kind())
    }

    /// Returns the first enabled rule matching `request`. Disabled rules are
    /// never evaluated, so they cannot trigger a catalog lookup.
    pub async fn decide(
        &self,
        request: &RequestDescriptor,
        toggles: &ToggleSet,
        catalog: &dyn CatalogLookup,
    ) -> Decision {
        for rule in &self.rules {
            let kind = rule.kind();
            if !toggles.is_enabled(kind) {
                continue;
            }
            if rule.matches(request, catalog).await {
                info!("Disabling user data for {} at path {}", kind, request.path());
                return Decision::suppress_for(kind);
            }
        }
        Decision::pass_through()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, CatalogNode, ItemKind, StaticCatalog};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const COLLECTIONS_FOLDER: &str = "9d7ad6af-e9af-a2da-b1a2-f6e00ad28fa6";
    const MOVIES_FOLDER: &str = "f137a2dd21bbc1b99aa5c0f6bf02a805";

    /// Catalog that counts calls and optionally fails every lookup.
    #[derive(Default)]
    struct CountingCatalog {
        inner: StaticCatalog,
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl CatalogLookup for CountingCatalog {
        async fn lookup_by_id(&self, id: Uuid) -> Result<Option<CatalogNode>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CatalogError::Transport("connection refused".to_string()));
            }
            self.inner.lookup_by_id(id).await
        }
    }

    fn catalog() -> CountingCatalog {
        CountingCatalog {
            inner: vec![
                CatalogNode::new(Uuid::parse_str(COLLECTIONS_FOLDER).unwrap(), ItemKind::CollectionFolder),
                CatalogNode::new(Uuid::parse_str(MOVIES_FOLDER).unwrap(), ItemKind::Folder),
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        }
    }

    fn only(kind: RuleKind) -> ToggleSet {
        let mut toggles = ToggleSet::default();
        match kind {
            RuleKind::AllItems => toggles.all_items = true,
            RuleKind::Collections => toggles.collections = true,
            RuleKind::ContinueWatching => toggles.continue_watching = true,
            RuleKind::NextUp => toggles.next_up = true,
            RuleKind::RecentlyAdded => toggles.recently_added = true,
            RuleKind::Seasons => toggles.seasons = true,
        }
        toggles
    }

    async fn decide(path: &str, toggles: ToggleSet) -> Decision {
        RuleEvaluator::standard()
            .decide(&RequestDescriptor::from_path(path), &toggles, &catalog())
            .await
    }

    #[tokio::test]
    async fn test_disabled_toggles_never_suppress() {
        let by_parent = format!("/Items?parentId={}", COLLECTIONS_FOLDER);
        let paths = [
            "/Items",
            "/Users/1/Items/Resume",
            "/Shows/NextUp",
            "/Users/1/Items/Latest",
            "/Shows/abc/Seasons",
            "/Items?includeItemTypes=BoxSet",
            by_parent.as_str(),
        ];
        let catalog = catalog();
        for path in paths {
            let decision = RuleEvaluator::standard()
                .decide(&RequestDescriptor::from_path(path), &ToggleSet::default(), &catalog)
                .await;
            assert!(!decision.suppress(), "{} should pass through", path);
        }
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_each_suffix_rule() {
        let cases = [
            (RuleKind::AllItems, "/Users/1/Items"),
            (RuleKind::ContinueWatching, "/UserItems/Resume"),
            (RuleKind::NextUp, "/Shows/NextUp"),
            (RuleKind::RecentlyAdded, "/Items/Latest"),
            (RuleKind::Seasons, "/Shows/abc/Seasons"),
        ];
        for (kind, path) in cases {
            let decision = decide(path, only(kind)).await;
            assert_eq!(decision.rule(), Some(kind), "path {}", path);
        }
    }

    #[tokio::test]
    async fn test_suffix_match_ignores_case() {
        for path in ["/items", "/ITEMS", "/Items", "/Users/1/iTeMs"] {
            assert!(decide(path, only(RuleKind::AllItems)).await.suppress(), "path {}", path);
        }
    }

    #[tokio::test]
    async fn test_unrelated_paths_pass_through() {
        for path in ["/System/Info", "/Items/123", "/Shows/abc/Episodes", "/ItemsX", "/Seasons/extra", ""] {
            assert!(!decide(path, ToggleSet::all()).await.suppress(), "path {}", path);
        }
    }

    #[tokio::test]
    async fn test_rules_only_fire_for_their_toggle() {
        assert_eq!(
            decide("/Shows/abc/Seasons", only(RuleKind::Seasons)).await.rule(),
            Some(RuleKind::Seasons)
        );
        assert!(!decide("/Shows/abc/Seasons", only(RuleKind::AllItems)).await.suppress());
    }

    #[tokio::test]
    async fn test_collections_by_item_type() {
        let toggles = only(RuleKind::Collections);
        assert!(decide("/Items?includeItemTypes=BoxSet", toggles).await.suppress());
        assert!(decide("/Items?includeItemTypes=Movie,BoxSet,Series", toggles).await.suppress());
        assert!(decide("/Items?includeItemTypes=Movie&includeItemTypes=BoxSet", toggles).await.suppress());
        // Item types are matched exactly.
        assert!(!decide("/Items?includeItemTypes=boxset", toggles).await.suppress());
        assert!(!decide("/Items?includeItemTypes=Movie", toggles).await.suppress());
    }

    #[tokio::test]
    async fn test_collections_item_type_skips_catalog() {
        let catalog = catalog();
        let request = RequestDescriptor::from_path(&format!(
            "/Items?includeItemTypes=BoxSet&parentId={}",
            MOVIES_FOLDER
        ));
        let decision = RuleEvaluator::standard()
            .decide(&request, &only(RuleKind::Collections), &catalog)
            .await;
        assert_eq!(decision.rule(), Some(RuleKind::Collections));
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_collections_by_parent_folder() {
        let toggles = only(RuleKind::Collections);
        let catalog = catalog();
        let evaluator = RuleEvaluator::standard();

        let request = RequestDescriptor::from_path(&format!("/Users/1/Items?parentId={}", COLLECTIONS_FOLDER));
        assert!(evaluator.decide(&request, &toggles, &catalog).await.suppress());
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);

        let request = RequestDescriptor::from_path(&format!("/Users/1/Items?parentId={}", MOVIES_FOLDER));
        assert!(!evaluator.decide(&request, &toggles, &catalog).await.suppress());

        let request = RequestDescriptor::from_path("/Items?parentId=00000000-0000-0000-0000-000000000001");
        assert!(!evaluator.decide(&request, &toggles, &catalog).await.suppress());
    }

    #[tokio::test]
    async fn test_collections_uses_first_parent_id() {
        let request = RequestDescriptor::from_path(&format!(
            "/Items?parentId={}&parentId={}",
            MOVIES_FOLDER, COLLECTIONS_FOLDER
        ));
        let decision = RuleEvaluator::standard()
            .decide(&request, &only(RuleKind::Collections), &catalog())
            .await;
        assert!(!decision.suppress());
    }

    #[tokio::test]
    async fn test_collections_malformed_parent_id() {
        let catalog = catalog();
        let request = RequestDescriptor::from_path("/Items?parentId=not-a-guid");
        let decision = RuleEvaluator::standard()
            .decide(&request, &only(RuleKind::Collections), &catalog)
            .await;
        assert!(!decision.suppress());
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_collections_lookup_failure_is_non_match() {
        let catalog = CountingCatalog {
            fail: true,
            ..catalog()
        };
        let request = RequestDescriptor::from_path(&format!("/Items?parentId={}", COLLECTIONS_FOLDER));
        let decision = RuleEvaluator::standard()
            .decide(&request, &only(RuleKind::Collections), &catalog)
            .await;
        assert!(!decision.suppress());
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        // Both the all-items and collections rules match; all-items comes first.
        let decision = decide("/Items?includeItemTypes=BoxSet", ToggleSet::all()).await;
        assert_eq!(decision.rule(), Some(RuleKind::AllItems));
    }

    #[tokio::test]
    async fn test_decide_is_repeatable() {
        let request = RequestDescriptor::from_path("/Shows/NextUp?userId=1");
        let evaluator = RuleEvaluator::standard();
        let catalog = catalog();
        let first = evaluator.decide(&request, &ToggleSet::all(), &catalog).await;
        let second = evaluator.decide(&request, &ToggleSet::all(), &catalog).await;
        assert_eq!(first, second);
        assert_eq!(first.rule(), Some(RuleKind::NextUp));
    }

    #[tokio::test]
    async fn test_custom_rule_set() {
        let evaluator = RuleEvaluator::new(vec![Box::new(PathSuffixRule::new(RuleKind::Seasons, "/Children"))]);
        assert_eq!(evaluator.rule_kinds().collect::<Vec<_>>(), vec![RuleKind::Seasons]);
        let request = RequestDescriptor::from_path("/Shows/abc/Children");
        assert!(evaluator.decide(&request, &only(RuleKind::Seasons), &catalog()).await.suppress());
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(
            RuleEvaluator::standard().rule_kinds().collect::<Vec<_>>(),
            RuleKind::ORDER.to_vec()
        );
    }
}
