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
//! Envoy external processing callout that disables per-user watch-state data
//! on selected media-server endpoints.
//!
//! Envoy streams each request's headers to [`service::ExtProcService`]. The
//! [`processor::UserDataProcessor`] classifies the request with the
//! [`rules::RuleEvaluator`] and, when an enabled rule matches, rewrites the
//! `:path` query string so the handler receives `enableUserData=false`.
//! Requests are never rejected: every failure falls back to passing the
//! request through unchanged.

mod gen;

pub use gen::{envoy, udpa, validate, xds};

pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod interceptor;
pub mod processor;
pub mod rules;
pub mod scope;
pub mod server;
pub mod service;
pub mod toggles;
pub mod utils;
