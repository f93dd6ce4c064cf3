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
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use userdata_callout::{
    config::{Settings, DEFAULT_CONFIG_PATH},
    interceptor::Interceptor,
    processor::UserDataProcessor,
    rules::RuleEvaluator,
    server::CalloutServer,
    toggles::{self, ToggleStore},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Settings file from the first argument, or the default location.
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let settings = Settings::load(&config_path)?;
    let reload_interval = settings.reload_interval();
    let scope = settings.scope.build()?;

    let toggles = Arc::new(ToggleStore::from_option(settings.toggles));
    match toggles.snapshot() {
        Some(current) => {
            info!("Toggle configuration: {}", current);
            if !current.any_enabled() {
                info!("No rule enabled; user data is left enabled everywhere");
            }
        }
        None => warn!("No toggles configured; requests will pass through unchanged"),
    }

    let catalog = settings.catalog.build()?;
    let interceptor = Interceptor::new(RuleEvaluator::standard(), catalog);
    let processor =
        UserDataProcessor::new(interceptor, toggles.clone()).with_scope(scope);

    let reload = toggles::spawn_reload(toggles, config_path, reload_interval);

    let server = CalloutServer::new(settings.server);
    let secure = server.spawn_grpc(processor.clone()).await;
    let plaintext = server.spawn_plaintext_grpc(processor.clone()).await;
    let health = server.spawn_health_check().await;

    let _ = tokio::try_join!(secure, plaintext, health, reload)?;

    Ok(())
}
