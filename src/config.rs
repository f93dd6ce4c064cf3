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
use crate::catalog::{CatalogLookup, CatalogNode, ItemKind, JellyfinCatalog, StaticCatalog};
use crate::scope::{RouteScope, ScopeError, STANDARD_ROUTES};
use crate::toggles::ToggleSet;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

pub const DEFAULT_CONFIG_PATH: &str = "config/userdata.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid catalog configuration: {0}")]
    Catalog(String),
    #[error("Invalid route scope: {0}")]
    Scope(#[from] ScopeError),
}

/// Top-level settings file.
///
/// `toggles` is optional on purpose: leaving it out means no configuration
/// is loaded and every request passes through untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub toggles: Option<ToggleSet>,
    pub catalog: CatalogConfig,
    pub scope: ScopeConfig,
    /// Seconds between checks of the settings file; 0 disables reloading.
    pub reload_interval_secs: u64,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn reload_interval(&self) -> Duration {
        Duration::from_secs(self.reload_interval_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
    pub plaintext_address: Option<String>,
    pub health_check_address: String,
    pub cert_file: PathBuf,
    pub key_file: PathBuf,
    pub enable_plaintext_server: bool,
    pub enable_tls: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:443".to_string(),
            plaintext_address: Some("0.0.0.0:8080".to_string()),
            health_check_address: "0.0.0.0:80".to_string(),
            cert_file: PathBuf::from("ssl_creds/localhost.crt"),
            key_file: PathBuf::from("ssl_creds/localhost.key"),
            enable_plaintext_server: true,
            enable_tls: false,
        }
    }
}

/// Endpoints the callout may rewrite. Everything else passes through.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// Prefix the media server is mounted under, e.g. `/jellyfin`.
    pub base_path: String,
    /// Route templates; `{name}` matches one path segment.
    pub routes: Vec<String>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            routes: STANDARD_ROUTES.iter().map(|route| route.to_string()).collect(),
        }
    }
}

impl ScopeConfig {
    pub fn build(&self) -> Result<RouteScope, ConfigError> {
        Ok(RouteScope::new(&self.base_path, &self.routes)?)
    }
}

/// Where collection lookups for `parentId` are answered.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum CatalogConfig {
    /// A fixed list of nodes declared in the settings file.
    Static {
        #[serde(default)]
        nodes: Vec<StaticNodeConfig>,
    },
    /// The media server's own item API.
    Jellyfin {
        base_url: String,
        #[serde(default)]
        api_key: Option<String>,
        #[serde(default = "default_lookup_timeout_ms")]
        timeout_ms: u64,
    },
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig::Static { nodes: Vec::new() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticNodeConfig {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
}

fn default_lookup_timeout_ms() -> u64 {
    500
}

impl CatalogConfig {
    pub fn build(&self) -> Result<Arc<dyn CatalogLookup>, ConfigError> {
        match self {
            CatalogConfig::Static { nodes } => Ok(Arc::new(
                nodes
                    .iter()
                    .map(|node| CatalogNode::new(node.id, ItemKind::from(node.kind.as_str())))
                    .collect::<StaticCatalog>(),
            )),
            CatalogConfig::Jellyfin {
                base_url,
                api_key,
                timeout_ms,
            } => {
                if base_url.trim().is_empty() {
                    return Err(ConfigError::Catalog("base_url must not be empty".to_string()));
                }
                if *timeout_ms == 0 {
                    return Err(ConfigError::Catalog("timeout_ms must be positive".to_string()));
                }
                Ok(Arc::new(JellyfinCatalog::new(
                    base_url.clone(),
                    api_key.clone(),
                    Duration::from_millis(*timeout_ms),
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_use_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert!(settings.toggles.is_none());
        assert_eq!(settings.server.plaintext_address.as_deref(), Some("0.0.0.0:8080"));
        assert!(settings.server.enable_plaintext_server);
        assert!(!settings.server.enable_tls);
        assert!(matches!(settings.catalog, CatalogConfig::Static { ref nodes } if nodes.is_empty()));
        assert_eq!(settings.reload_interval(), Duration::ZERO);
        assert_eq!(settings.scope.build().unwrap(), RouteScope::standard());
    }

    #[test]
    fn test_scope_settings() {
        let settings = Settings::from_json(
            r#"{"scope": {"base_path": "/jellyfin", "routes": ["/Shows/NextUp"]}}"#,
        )
        .unwrap();
        let scope = settings.scope.build().unwrap();
        assert!(scope.contains("/jellyfin/Shows/NextUp"));
        assert!(!scope.contains("/jellyfin/Items"));

        let settings = Settings::from_json(r#"{"scope": {"routes": ["Items"]}}"#).unwrap();
        assert!(matches!(settings.scope.build(), Err(ConfigError::Scope(_))));
    }

    #[test]
    fn test_full_settings() {
        let settings = Settings::from_json(
            r#"{
                "server": {"address": "127.0.0.1:9443", "enable_tls": true},
                "toggles": {"collections": true, "recentlyAdded": true},
                "catalog": {"backend": "jellyfin", "base_url": "http://jellyfin:8096", "api_key": "secret"},
                "reload_interval_secs": 5
            }"#,
        )
        .unwrap();

        assert_eq!(settings.server.address, "127.0.0.1:9443");
        assert!(settings.server.enable_tls);
        assert_eq!(settings.server.health_check_address, "0.0.0.0:80");

        let toggles = settings.toggles.unwrap();
        assert!(toggles.collections);
        assert!(toggles.recently_added);
        assert!(!toggles.all_items);

        match &settings.catalog {
            CatalogConfig::Jellyfin {
                base_url,
                api_key,
                timeout_ms,
            } => {
                assert_eq!(base_url, "http://jellyfin:8096");
                assert_eq!(api_key.as_deref(), Some("secret"));
                assert_eq!(*timeout_ms, 500);
            }
            other => panic!("Unexpected catalog config: {:?}", other),
        }
        assert_eq!(settings.reload_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_static_nodes_reject_bad_ids() {
        let result = Settings::from_json(
            r#"{"catalog": {"backend": "static", "nodes": [{"id": "not-a-guid", "type": "CollectionFolder"}]}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_jellyfin_catalog_requires_base_url() {
        let config = CatalogConfig::Jellyfin {
            base_url: " ".to_string(),
            api_key: None,
            timeout_ms: 100,
        };
        assert!(matches!(config.build(), Err(ConfigError::Catalog(_))));
    }

    #[test]
    fn test_load_reports_path() {
        let err = Settings::load(Path::new("/nonexistent/settings.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/settings.json"));
    }

    #[test]
    fn test_load_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{"toggles": {"DisableOnSeasons": true}}"#).unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert!(settings.toggles.unwrap().seasons);
    }
}
