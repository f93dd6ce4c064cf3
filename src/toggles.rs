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
//! Feature toggles for each endpoint category and the store that hands out
//! consistent snapshots of them.

use crate::config::{ConfigError, Settings};
use crate::rules::RuleKind;
use log::{info, warn};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::{Duration, SystemTime};
use tokio::task::JoinHandle;

/// Per-category switches. Every flag defaults to `false`, which leaves all
/// traffic untouched.
///
/// Both the camelCase names and the `DisableOn*` names used by the media
/// server plugin settings are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleSet {
    #[serde(alias = "DisableOnAllItems")]
    pub all_items: bool,
    #[serde(alias = "DisableOnCollections")]
    pub collections: bool,
    #[serde(alias = "DisableOnContinueWatching")]
    pub continue_watching: bool,
    #[serde(alias = "DisableOnNextUp")]
    pub next_up: bool,
    #[serde(alias = "DisableOnRecentlyAdded")]
    pub recently_added: bool,
    #[serde(alias = "DisableOnSeasons")]
    pub seasons: bool,
}

impl ToggleSet {
    /// A set with every category enabled.
    pub fn all() -> Self {
        Self {
            all_items: true,
            collections: true,
            continue_watching: true,
            next_up: true,
            recently_added: true,
            seasons: true,
        }
    }

    /// Whether the rule for `kind` may fire.
    pub fn is_enabled(&self, kind: RuleKind) -> bool {
        match kind {
            RuleKind::AllItems => self.all_items,
            RuleKind::Collections => self.collections,
            RuleKind::ContinueWatching => self.continue_watching,
            RuleKind::NextUp => self.next_up,
            RuleKind::RecentlyAdded => self.recently_added,
            RuleKind::Seasons => self.seasons,
        }
    }

    pub fn any_enabled(&self) -> bool {
        RuleKind::ORDER.iter().any(|kind| self.is_enabled(*kind))
    }
}

impl fmt::Display for ToggleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "allItems: {}, collections: {}, continueWatching: {}, nextUp: {}, recentlyAdded: {}, seasons: {}",
            self.all_items,
            self.collections,
            self.continue_watching,
            self.next_up,
            self.recently_added,
            self.seasons
        )
    }
}

/// Holder for the active [`ToggleSet`].
///
/// Readers get an `Arc` snapshot of a complete set and writers swap in a
/// whole new set, so a request never sees a mix of old and new flags. An
/// empty store means no configuration has been loaded.
#[derive(Debug, Default)]
pub struct ToggleStore {
    current: RwLock<Option<Arc<ToggleSet>>>,
}

impl ToggleStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(toggles: ToggleSet) -> Self {
        Self::from_option(Some(toggles))
    }

    pub fn from_option(toggles: Option<ToggleSet>) -> Self {
        Self {
            current: RwLock::new(toggles.map(Arc::new)),
        }
    }

    /// The set in effect right now, or `None` when nothing is configured.
    pub fn snapshot(&self) -> Option<Arc<ToggleSet>> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn replace(&self, toggles: ToggleSet) {
        self.store(Some(Arc::new(toggles)));
    }

    pub fn clear(&self) {
        self.store(None);
    }

    fn store(&self, next: Option<Arc<ToggleSet>>) {
        match self.current.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

/// Re-reads the settings file whenever its modification time moves.
#[derive(Debug)]
pub struct ToggleReloader {
    store: Arc<ToggleStore>,
    path: PathBuf,
    last_modified: Option<SystemTime>,
}

impl ToggleReloader {
    /// `last_modified` starts unset, so the first [`poll`](Self::poll) always reads the file.
    pub fn new(store: Arc<ToggleStore>, path: PathBuf) -> Self {
        Self {
            store,
            path,
            last_modified: None,
        }
    }

    /// Applies the file's `toggles` section if the file changed since the
    /// last poll. Returns whether the store was updated.
    ///
    /// On error the store keeps its previous set.
    pub async fn poll(&mut self) -> Result<bool, ConfigError> {
        let modified = tokio::fs::metadata(&self.path)
            .await
            .and_then(|meta| meta.modified())
            .map_err(|source| ConfigError::Io {
                path: self.path.clone(),
                source,
            })?;
        if self.last_modified == Some(modified) {
            return Ok(false);
        }

        let settings = Settings::load(&self.path)?;
        self.last_modified = Some(modified);
        match settings.toggles {
            Some(toggles) => {
                info!("Toggle configuration reloaded: {}", toggles);
                if !toggles.any_enabled() {
                    info!("No rule enabled; user data is left enabled everywhere");
                }
                self.store.replace(toggles);
            }
            None => {
                warn!(
                    "No toggles in {}; user data is left enabled everywhere",
                    self.path.display()
                );
                self.store.clear();
            }
        }
        Ok(true)
    }
}

/// Spawns a task polling `path` every `interval`. A zero interval disables
/// reloading and the returned task finishes immediately.
pub fn spawn_reload(store: Arc<ToggleStore>, path: PathBuf, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        if interval.is_zero() {
            info!("Toggle reloading is disabled");
            return;
        }

        let mut reloader = ToggleReloader::new(store, path);
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            if let Err(e) = reloader.poll().await {
                warn!("Keeping previous toggles: {}", e);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_settings(file: &tempfile::NamedTempFile, body: &str) {
        std::fs::write(file.path(), body).unwrap();
    }

    #[test]
    fn test_default_toggles_are_all_disabled() {
        let toggles = ToggleSet::default();
        assert!(!toggles.any_enabled());
        for kind in RuleKind::ORDER {
            assert!(!toggles.is_enabled(kind), "{} should be disabled", kind);
        }
    }

    #[test]
    fn test_is_enabled_maps_each_flag() {
        let toggles = ToggleSet {
            next_up: true,
            ..Default::default()
        };
        assert!(toggles.is_enabled(RuleKind::NextUp));
        assert!(!toggles.is_enabled(RuleKind::Seasons));
        assert!(toggles.any_enabled());
    }

    #[test]
    fn test_deserialize_accepts_plugin_names() {
        let toggles: ToggleSet =
            serde_json::from_str(r#"{"DisableOnAllItems": true, "seasons": true}"#).unwrap();
        assert!(toggles.all_items);
        assert!(toggles.seasons);
        assert!(!toggles.collections);
    }

    #[test]
    fn test_display_lists_every_flag() {
        let rendered = ToggleSet::all().to_string();
        assert_eq!(
            rendered,
            "allItems: true, collections: true, continueWatching: true, nextUp: true, recentlyAdded: true, seasons: true"
        );
    }

    #[test]
    fn test_store_replaces_whole_set() {
        let store = ToggleStore::empty();
        assert!(store.snapshot().is_none());

        store.replace(ToggleSet::all());
        let before = store.snapshot().unwrap();

        store.replace(ToggleSet::default());
        let after = store.snapshot().unwrap();

        // Earlier snapshots are unaffected by later replacements.
        assert_eq!(*before, ToggleSet::all());
        assert_eq!(*after, ToggleSet::default());

        store.clear();
        assert!(store.snapshot().is_none());
    }

    #[tokio::test]
    async fn test_reloader_applies_and_keeps_toggles() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_settings(&file, r#"{"toggles": {"nextUp": true}}"#);

        let store = Arc::new(ToggleStore::empty());
        let mut reloader = ToggleReloader::new(store.clone(), file.path().to_path_buf());

        assert!(reloader.poll().await.unwrap());
        assert!(store.snapshot().unwrap().next_up);

        // Unchanged file is not re-read.
        assert!(!reloader.poll().await.unwrap());

        // A broken file leaves the previous set in place.
        write_settings(&file, "{ not json");
        reloader.last_modified = None;
        assert!(reloader.poll().await.is_err());
        assert!(store.snapshot().unwrap().next_up);
    }

    #[tokio::test]
    async fn test_reloader_clears_when_toggles_removed() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_settings(&file, r#"{"toggles": {"seasons": true}}"#);

        let store = Arc::new(ToggleStore::empty());
        let mut reloader = ToggleReloader::new(store.clone(), file.path().to_path_buf());
        reloader.poll().await.unwrap();
        assert!(store.snapshot().is_some());

        write_settings(&file, "{}");
        reloader.last_modified = None;
        assert!(reloader.poll().await.unwrap());
        assert!(store.snapshot().is_none());
    }

    #[tokio::test]
    async fn test_reloader_reports_missing_file() {
        let store = Arc::new(ToggleStore::new(ToggleSet::all()));
        let mut reloader = ToggleReloader::new(store.clone(), PathBuf::from("/nonexistent/userdata.json"));
        assert!(matches!(reloader.poll().await, Err(ConfigError::Io { .. })));
        assert_eq!(*store.snapshot().unwrap(), ToggleSet::all());
    }

    #[tokio::test]
    async fn test_zero_interval_disables_reload() {
        let store = Arc::new(ToggleStore::empty());
        let handle = spawn_reload(store, PathBuf::from("unused.json"), Duration::ZERO);
        handle.await.unwrap();
    }
}
