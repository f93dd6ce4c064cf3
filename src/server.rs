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
//! # CalloutServer Module
//!
//! Hosts the ext_proc service. Up to three listeners run side by side:
//!
//! - a plaintext gRPC server (enabled by default), which is what Envoy
//!   normally talks to inside a cluster
//! - a TLS gRPC server, when `enable_tls` is set
//! - an HTTP health check answering 200 on every path

use crate::config::ServerConfig;
use crate::processor::ExtProcessor;
use crate::service::ExtProcService;
use futures::Stream;
use hyper::{Body, Response, Server as HyperServer};
use log::{error, info};
use std::convert::Infallible;
use std::error;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::net::TcpListener;
use tonic::transport::{Identity, Server};

type ServerResult = Result<(), Box<dyn error::Error + Send + Sync>>;

#[derive(Clone)]
pub struct CalloutServer {
    config: ServerConfig,
}

/// Adapts a `TcpListener` to the stream hyper's `accept::from_stream` expects.
struct TcpListenerStream {
    listener: TcpListener,
}

impl Stream for TcpListenerStream {
    type Item = Result<tokio::net::TcpStream, std::io::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match self.listener.poll_accept(cx) {
            Poll::Ready(Ok((socket, _addr))) => Poll::Ready(Some(Ok(socket))),
            Poll::Ready(Err(err)) => Poll::Ready(Some(Err(err))),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl CalloutServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Spawns the TLS gRPC server. The task ends at once when TLS is disabled.
    pub async fn spawn_grpc<P: ExtProcessor + Clone>(
        &self,
        processor: P,
    ) -> tokio::task::JoinHandle<()> {
        let server = self.clone();
        tokio::spawn(async move {
            if let Err(e) = server.start_grpc(processor).await {
                error!("Failed to start secure server: {}", e);
            }
        })
    }

    pub async fn spawn_plaintext_grpc<P: ExtProcessor + Clone>(
        &self,
        processor: P,
    ) -> tokio::task::JoinHandle<()> {
        let server = self.clone();
        tokio::spawn(async move {
            if let Err(e) = server.start_plaintext_grpc(processor).await {
                error!("Failed to start plaintext server: {}", e);
            }
        })
    }

    pub async fn spawn_health_check(&self) -> tokio::task::JoinHandle<()> {
        let server = self.clone();
        tokio::spawn(async move {
            if let Err(e) = server.start_health_check().await {
                error!("Failed to start health check server: {}", e);
            }
        })
    }

    async fn start_grpc<P: ExtProcessor>(&self, processor: P) -> ServerResult {
        if !self.config.enable_tls {
            info!("TLS server is disabled");
            return Ok(());
        }

        if !tokio::fs::try_exists(&self.config.cert_file).await.unwrap_or(false) {
            return Err(format!("Certificate file not found: {:?}", self.config.cert_file).into());
        }
        if !tokio::fs::try_exists(&self.config.key_file).await.unwrap_or(false) {
            return Err(format!("Key file not found: {:?}", self.config.key_file).into());
        }

        info!("Loading TLS certificates...");
        let cert = tokio::fs::read(&self.config.cert_file)
            .await
            .map_err(|e| format!("Failed to read certificate file: {}", e))?;
        let key = tokio::fs::read(&self.config.key_file)
            .await
            .map_err(|e| format!("Failed to read key file: {}", e))?;

        let identity = Identity::from_pem(cert, key);
        let addr = self
            .config
            .address
            .parse()
            .map_err(|e| format!("Failed to parse secure address: {}", e))?;

        let service = ExtProcService::new(processor);

        info!("Starting secure gRPC server on {}", self.config.address);
        Server::builder()
            .tls_config(tonic::transport::ServerTlsConfig::new().identity(identity))
            .map_err(|e| format!("Failed to configure TLS: {}", e))?
            .add_service(service.into_server())
            .serve(addr)
            .await
            .map_err(|e| format!("Secure server error: {}", e))?;

        Ok(())
    }

    async fn start_plaintext_grpc<P: ExtProcessor>(&self, processor: P) -> ServerResult {
        if !self.config.enable_plaintext_server {
            info!("Plaintext server is disabled");
            return Ok(());
        }

        let plaintext_addr = self
            .config
            .plaintext_address
            .as_ref()
            .ok_or("Plaintext address not configured")?;
        let addr = plaintext_addr.parse()?;
        let service = ExtProcService::new(processor);

        info!("Starting plaintext gRPC server on {}", plaintext_addr);
        Server::builder()
            .add_service(service.into_server())
            .serve(addr)
            .await?;

        Ok(())
    }

    async fn start_health_check(&self) -> ServerResult {
        let listener = TcpListener::bind(&self.config.health_check_address).await?;
        info!(
            "Starting health check server on {}",
            self.config.health_check_address
        );
        serve_health_check(listener).await
    }
}

async fn serve_health_check(listener: TcpListener) -> ServerResult {
    let make_service = hyper::service::make_service_fn(|_| async {
        Ok::<_, Infallible>(hyper::service::service_fn(|_| async {
            Ok::<_, Infallible>(Response::new(Body::from("")))
        }))
    });

    HyperServer::builder(hyper::server::accept::from_stream(TcpListenerStream { listener }))
        .serve(make_service)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::interceptor::Interceptor;
    use crate::processor::UserDataProcessor;
    use crate::rules::RuleEvaluator;
    use crate::toggles::ToggleStore;
    use hyper::{Client, StatusCode};
    use std::sync::Arc;

    fn processor() -> UserDataProcessor {
        UserDataProcessor::new(
            Interceptor::new(RuleEvaluator::standard(), Arc::new(StaticCatalog::new())),
            Arc::new(ToggleStore::empty()),
        )
    }

    #[tokio::test]
    async fn test_disabled_listeners_return_immediately() {
        let server = CalloutServer::new(ServerConfig {
            enable_tls: false,
            enable_plaintext_server: false,
            ..Default::default()
        });
        assert!(server.start_grpc(processor()).await.is_ok());
        assert!(server.start_plaintext_grpc(processor()).await.is_ok());
    }

    #[tokio::test]
    async fn test_tls_requires_certificates() {
        let server = CalloutServer::new(ServerConfig {
            enable_tls: true,
            cert_file: "/nonexistent/tls.crt".into(),
            ..Default::default()
        });
        let err = server.start_grpc(processor()).await.unwrap_err();
        assert!(err.to_string().contains("Certificate file not found"));
    }

    #[tokio::test]
    async fn test_health_check_answers_ok() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve_health_check(listener));

        let uri = format!("http://{}/healthz", addr).parse().unwrap();
        let response = Client::new().get(uri).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
