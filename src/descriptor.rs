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
use percent_encoding::percent_decode_str;
use url::form_urlencoded;

/// Read-only view of an inbound request: its path and its query parameters.
///
/// Repeated query keys keep every value in arrival order. Names are
/// compared exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
    path: String,
    query: Vec<(String, Vec<String>)>,
}

impl RequestDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Splits a raw request target such as `/Users/1/Items?parentId=2` into
    /// a percent-decoded path and decoded query parameters. Any fragment is
    /// dropped.
    pub fn from_path(raw: &str) -> Self {
        let (path, query) = split_path(raw);
        let mut descriptor = Self::new(percent_decode_str(path).decode_utf8_lossy());
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            descriptor.push_query(name.into_owned(), value.into_owned());
        }
        descriptor
    }

    fn push_query(&mut self, name: String, value: String) {
        match self.query.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, values)) => values.push(value),
            None => self.query.push((name, vec![value])),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// All values for `name`, empty when the parameter is absent.
    pub fn query_values(&self, name: &str) -> &[String] {
        self.query
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or_default()
    }

    pub fn first_query_value(&self, name: &str) -> Option<&str> {
        self.query_values(name).first().map(String::as_str)
    }
}

/// Drops any fragment and splits the raw target at the first `?`. The query
/// part is empty when there is none.
pub(crate) fn split_path(raw: &str) -> (&str, &str) {
    let raw = raw.split('#').next().unwrap_or_default();
    raw.split_once('?').unwrap_or((raw, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_without_query() {
        let descriptor = RequestDescriptor::from_path("/Shows/abc/Seasons");
        assert_eq!(descriptor.path(), "/Shows/abc/Seasons");
        assert!(descriptor.query_values("parentId").is_empty());
    }

    #[test]
    fn test_from_path_keeps_repeated_keys_in_order() {
        let descriptor = RequestDescriptor::from_path(
            "/Items?includeItemTypes=Movie&parentId=1&includeItemTypes=BoxSet",
        );
        assert_eq!(descriptor.path(), "/Items");
        assert_eq!(descriptor.query_values("includeItemTypes"), ["Movie", "BoxSet"]);
        assert_eq!(descriptor.first_query_value("parentId"), Some("1"));
    }

    #[test]
    fn test_from_path_decodes_values() {
        let descriptor = RequestDescriptor::from_path("/Items?includeItemTypes=Movie%2CBoxSet&searchTerm=a+b#top");
        assert_eq!(descriptor.first_query_value("includeItemTypes"), Some("Movie,BoxSet"));
        assert_eq!(descriptor.first_query_value("searchTerm"), Some("a b"));
    }

    #[test]
    fn test_query_names_are_case_sensitive() {
        let descriptor = RequestDescriptor::from_path("/Items?ParentId=1");
        assert!(descriptor.first_query_value("parentId").is_none());
        assert_eq!(descriptor.first_query_value("ParentId"), Some("1"));
    }

    #[test]
    fn test_empty_path() {
        let descriptor = RequestDescriptor::from_path("");
        assert_eq!(descriptor.path(), "");
        assert!(descriptor.first_query_value("parentId").is_none());
    }

    #[test]
    fn test_from_path_decodes_path() {
        let descriptor = RequestDescriptor::from_path("/Shows/abc/Season%73?userId=1");
        assert_eq!(descriptor.path(), "/Shows/abc/Seasons");
        let descriptor = RequestDescriptor::from_path("/Items/%FF");
        assert_eq!(descriptor.path(), "/Items/\u{FFFD}");
    }

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/Items?a=1#frag"), ("/Items", "a=1"));
        assert_eq!(split_path("/Items#frag?x"), ("/Items", ""));
        assert_eq!(split_path("/Items"), ("/Items", ""));
    }
}
