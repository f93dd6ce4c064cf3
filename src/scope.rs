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
//! Route scope: the media-server endpoints this callout is allowed to touch.
//!
//! Envoy forwards every request, but only a handful of handlers bind the
//! `enableUserData` argument. A request outside the scope is passed through
//! before any rule runs, so it can neither be rewritten nor cause a catalog
//! lookup.

use thiserror::Error;

/// Handlers that accept `enableUserData`, as route templates. `{name}`
/// stands for one path segment.
pub const STANDARD_ROUTES: [&str; 8] = [
    // Items: GetItems, GetItemsByUserIdLegacy
    "/Items",
    "/Users/{userId}/Items",
    // Items: GetResumeItems, GetResumeItemsLegacy
    "/UserItems/Resume",
    "/Users/{userId}/Items/Resume",
    // UserLibrary: GetLatestMedia, GetLatestMediaLegacy
    "/Items/Latest",
    "/Users/{userId}/Items/Latest",
    // TvShows: GetNextUp, GetSeasons
    "/Shows/NextUp",
    "/Shows/{seriesId}/Seasons",
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScopeError {
    #[error("Route template {0:?} must start with '/'")]
    NotAbsolute(String),
    #[error("Route template {0:?} has an empty segment")]
    EmptySegment(String),
    #[error("Base path {0:?} must start with '/'")]
    BadBasePath(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Parameter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RouteTemplate {
    segments: Vec<Segment>,
}

impl RouteTemplate {
    fn parse(template: &str) -> Result<Self, ScopeError> {
        let Some(rest) = template.strip_prefix('/') else {
            return Err(ScopeError::NotAbsolute(template.to_string()));
        };
        let segments = rest
            .trim_end_matches('/')
            .split('/')
            .map(|segment| match segment {
                "" => Err(ScopeError::EmptySegment(template.to_string())),
                s if s.starts_with('{') && s.ends_with('}') => Ok(Segment::Parameter),
                s => Ok(Segment::Literal(s.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    /// Literals compare ignoring ASCII case, as the host's router does.
    fn matches(&self, segments: &[&str]) -> bool {
        self.segments.len() == segments.len()
            && self
                .segments
                .iter()
                .zip(segments)
                .all(|(template, actual)| match template {
                    Segment::Literal(literal) => literal.eq_ignore_ascii_case(actual),
                    Segment::Parameter => !actual.is_empty(),
                })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteScope {
    base_path: String,
    routes: Vec<RouteTemplate>,
}

impl Default for RouteScope {
    fn default() -> Self {
        Self::standard()
    }
}

impl RouteScope {
    /// `base_path` is the prefix the media server is mounted under, such as
    /// `/jellyfin`; empty when it is served from the root.
    pub fn new<I, S>(base_path: &str, routes: I) -> Result<Self, ScopeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base_path = base_path.trim_end_matches('/');
        if !base_path.is_empty() && !base_path.starts_with('/') {
            return Err(ScopeError::BadBasePath(base_path.to_string()));
        }
        let routes = routes
            .into_iter()
            .map(|route| RouteTemplate::parse(route.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            base_path: base_path.to_string(),
            routes,
        })
    }

    /// The eight user-data handlers mounted at the root.
    pub fn standard() -> Self {
        Self {
            base_path: String::new(),
            routes: STANDARD_ROUTES
                .iter()
                .filter_map(|route| RouteTemplate::parse(route).ok())
                .collect(),
        }
    }

    /// Whether the decoded request `path` hits one of the routes.
    pub fn contains(&self, path: &str) -> bool {
        let Some(relative) = strip_prefix_ignore_ascii_case(path, &self.base_path) else {
            return false;
        };
        let Some(relative) = relative.strip_prefix('/') else {
            return false;
        };
        let segments: Vec<&str> = relative.trim_end_matches('/').split('/').collect();
        self.routes.iter().any(|route| route.matches(&segments))
    }
}

fn strip_prefix_ignore_ascii_case<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let head = path.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &path[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_scope_covers_user_data_handlers() {
        let scope = RouteScope::standard();
        for path in [
            "/Items",
            "/items/",
            "/Users/5d1b/Items",
            "/UserItems/Resume",
            "/Users/5d1b/Items/Resume",
            "/Items/Latest",
            "/Users/5d1b/Items/Latest",
            "/Shows/NextUp",
            "/shows/abc/seasons",
        ] {
            assert!(scope.contains(path), "{} should be in scope", path);
        }
    }

    #[test]
    fn test_standard_scope_excludes_other_endpoints() {
        let scope = RouteScope::standard();
        for path in [
            "/Genres",
            "/Items/Filters",
            "/Search/Hints",
            "/Items/abc",
            "/Shows/abc/Episodes",
            "/Shows//Seasons",
            "/Plugins/x/Items",
            "",
        ] {
            assert!(!scope.contains(path), "{} should be out of scope", path);
        }
    }

    #[test]
    fn test_base_path_prefix() {
        let scope = RouteScope::new("/jellyfin/", STANDARD_ROUTES).unwrap();
        assert!(scope.contains("/jellyfin/Shows/NextUp"));
        assert!(scope.contains("/Jellyfin/Items"));
        assert!(!scope.contains("/Shows/NextUp"));
        assert!(!scope.contains("/jellyfinItems"));
    }

    #[test]
    fn test_custom_routes() {
        let scope = RouteScope::new("", ["/Shows/{id}/Episodes"]).unwrap();
        assert!(scope.contains("/Shows/abc/Episodes"));
        assert!(!scope.contains("/Items"));
        assert!(!RouteScope::new("", Vec::<String>::new()).unwrap().contains("/Items"));
    }

    #[test]
    fn test_invalid_templates() {
        assert_eq!(
            RouteScope::new("", ["Items"]),
            Err(ScopeError::NotAbsolute("Items".to_string()))
        );
        assert_eq!(
            RouteScope::new("", ["/Shows//Seasons"]),
            Err(ScopeError::EmptySegment("/Shows//Seasons".to_string()))
        );
        assert_eq!(
            RouteScope::new("jellyfin", STANDARD_ROUTES),
            Err(ScopeError::BadBasePath("jellyfin".to_string()))
        );
    }
}
