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
//! # Mutations Utility Module
//!
//! Builders for the `ProcessingResponse` messages this callout sends back to
//! Envoy. Every response lets the request continue; the only mutation ever
//! produced is a header rewrite, used to replace the `:path` pseudo-header.

use crate::envoy::{
    config::core::v3::{HeaderValue, HeaderValueOption},
    service::ext_proc::v3::{
        processing_response::Response as ProcessingResponseType, BodyResponse, CommonResponse,
        HeaderMutation, HeadersResponse, ProcessingResponse,
    },
};

pub const PATH_HEADER: &str = ":path";

/// Creates a processing response that adds and/or removes HTTP headers.
///
/// # Arguments
///
/// * `headers_to_add` - (key, value) pairs to add or replace
/// * `headers_to_remove` - header names to remove
/// * `clear_route_cache` - Whether Envoy should recompute the route afterwards
/// * `is_request` - If true, modifies request headers; if false, response headers
/// * `append_action` - Optional append action for all headers (0=APPEND_NONE, 1=APPEND_IF_EXISTS_OR_ADD, 2=APPEND_IF_EXISTS)
pub fn add_header_mutation(
    headers_to_add: Vec<(String, String)>,
    headers_to_remove: Vec<String>,
    clear_route_cache: bool,
    is_request: bool,
    append_action: Option<i32>,
) -> ProcessingResponse {
    let header_mutation = HeaderMutation {
        set_headers: headers_to_add
            .into_iter()
            .map(|(key, value)| HeaderValueOption {
                header: Some(HeaderValue {
                    key,
                    raw_value: value.into_bytes(),
                    ..Default::default()
                }),
                // APPEND_NONE overwrites an existing header.
                append_action: append_action.unwrap_or(0),
                ..Default::default()
            })
            .collect(),
        remove_headers: headers_to_remove,
    };

    let common_response = CommonResponse {
        header_mutation: Some(header_mutation),
        clear_route_cache,
        ..Default::default()
    };

    headers_response(common_response, is_request)
}

/// Replaces the request target. The route is left alone: only the query
/// string changes, and routes here never match on it.
pub fn set_path_mutation(path_and_query: String) -> ProcessingResponse {
    add_header_mutation(
        vec![(PATH_HEADER.to_string(), path_and_query)],
        vec![],
        false,
        true,
        None,
    )
}

/// CONTINUE for a headers phase, with no changes.
pub fn pass_through_headers(is_request: bool) -> ProcessingResponse {
    headers_response(CommonResponse::default(), is_request)
}

/// CONTINUE for a body phase, with no changes.
pub fn pass_through_body(is_request: bool) -> ProcessingResponse {
    let body_response = BodyResponse {
        response: Some(CommonResponse::default()),
    };
    let response = if is_request {
        ProcessingResponseType::RequestBody(body_response)
    } else {
        ProcessingResponseType::ResponseBody(body_response)
    };
    ProcessingResponse {
        response: Some(response),
        ..Default::default()
    }
}

fn headers_response(common_response: CommonResponse, is_request: bool) -> ProcessingResponse {
    let headers_response = HeadersResponse {
        response: Some(common_response),
    };
    let response = if is_request {
        ProcessingResponseType::RequestHeaders(headers_response)
    } else {
        ProcessingResponseType::ResponseHeaders(headers_response)
    };
    ProcessingResponse {
        response: Some(response),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envoy::service::ext_proc::v3::common_response::ResponseStatus;

    fn set_headers(response: &ProcessingResponse) -> Vec<(String, String)> {
        let common = match &response.response {
            Some(ProcessingResponseType::RequestHeaders(headers))
            | Some(ProcessingResponseType::ResponseHeaders(headers)) => {
                headers.response.as_ref().expect("missing common response")
            }
            other => panic!("Unexpected response type: {:?}", other),
        };
        common
            .header_mutation
            .as_ref()
            .map(|mutation| {
                mutation
                    .set_headers
                    .iter()
                    .filter_map(|option| option.header.as_ref())
                    .map(|h| (h.key.clone(), String::from_utf8_lossy(&h.raw_value).into_owned()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_add_header_mutation_request() {
        let response = add_header_mutation(
            vec![("x-userdata".to_string(), "disabled".to_string())],
            vec!["x-remove".to_string()],
            true,
            true,
            Some(2),
        );

        if let Some(ProcessingResponseType::RequestHeaders(headers_response)) = &response.response {
            let common = headers_response.response.as_ref().unwrap();
            assert!(common.clear_route_cache);
            let mutation = common.header_mutation.as_ref().unwrap();
            assert_eq!(mutation.remove_headers, vec!["x-remove".to_string()]);
            assert_eq!(mutation.set_headers[0].append_action, 2);
        } else {
            panic!("Expected RequestHeaders response");
        }
        assert_eq!(
            set_headers(&response),
            vec![("x-userdata".to_string(), "disabled".to_string())]
        );
    }

    #[test]
    fn test_add_header_mutation_response() {
        let response = add_header_mutation(vec![], vec![], false, false, None);
        assert!(matches!(
            response.response,
            Some(ProcessingResponseType::ResponseHeaders(_))
        ));
    }

    #[test]
    fn test_set_path_mutation() {
        let response = set_path_mutation("/Items?enableUserData=false".to_string());
        assert_eq!(
            set_headers(&response),
            vec![(":path".to_string(), "/Items?enableUserData=false".to_string())]
        );
        if let Some(ProcessingResponseType::RequestHeaders(headers_response)) = response.response {
            let common = headers_response.response.unwrap();
            assert!(!common.clear_route_cache);
            assert_eq!(common.status, ResponseStatus::Continue as i32);
            assert_eq!(common.header_mutation.unwrap().set_headers[0].append_action, 0);
        } else {
            panic!("Expected RequestHeaders response");
        }
    }

    #[test]
    fn test_pass_through_headers() {
        let response = pass_through_headers(true);
        assert!(set_headers(&response).is_empty());

        let response = pass_through_headers(false);
        assert!(matches!(
            response.response,
            Some(ProcessingResponseType::ResponseHeaders(_))
        ));
    }

    #[test]
    fn test_pass_through_body() {
        match pass_through_body(true).response {
            Some(ProcessingResponseType::RequestBody(body)) => {
                let common = body.response.unwrap();
                assert!(common.body_mutation.is_none());
                assert!(common.header_mutation.is_none());
            }
            other => panic!("Unexpected response type: {:?}", other),
        }
        assert!(matches!(
            pass_through_body(false).response,
            Some(ProcessingResponseType::ResponseBody(_))
        ));
    }
}
