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
use crate::envoy::service::ext_proc::v3::{
    external_processor_server::{ExternalProcessor, ExternalProcessorServer},
    processing_request::Request as ProcessingRequestType,
    ProcessingRequest, ProcessingResponse,
};
use crate::processor::ExtProcessor;
use crate::utils::mutations;
use futures::Stream;
use log::{error, warn};
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};

pub struct ExtProcService {
    processor: Arc<dyn ExtProcessor>,
}

impl ExtProcService {
    pub fn new<P: ExtProcessor + 'static>(processor: P) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }

    pub fn into_server(self) -> ExternalProcessorServer<Self> {
        ExternalProcessorServer::new(self)
    }
}

/// Response that lets the phase of `request` continue unchanged.
fn fallback_response(request: &ProcessingRequestType) -> ProcessingResponse {
    match request {
        ProcessingRequestType::RequestHeaders(_) => mutations::pass_through_headers(true),
        ProcessingRequestType::ResponseHeaders(_) => mutations::pass_through_headers(false),
        ProcessingRequestType::RequestBody(_) => mutations::pass_through_body(true),
        ProcessingRequestType::ResponseBody(_) => mutations::pass_through_body(false),
        _ => ProcessingResponse::default(),
    }
}

async fn dispatch(processor: &dyn ExtProcessor, req: &ProcessingRequest) -> ProcessingResponse {
    let Some(request) = &req.request else {
        return ProcessingResponse::default();
    };
    let result = match request {
        ProcessingRequestType::RequestHeaders(_) => processor.process_request_headers(req).await,
        ProcessingRequestType::ResponseHeaders(_) => processor.process_response_headers(req).await,
        ProcessingRequestType::RequestBody(_) => processor.process_request_body(req).await,
        ProcessingRequestType::ResponseBody(_) => processor.process_response_body(req).await,
        _ => Ok(ProcessingResponse::default()),
    };
    // Processing is an optimisation; a failure must not fail the request.
    result.unwrap_or_else(|e| {
        error!("Processor failed, passing request through: {}", e);
        fallback_response(request)
    })
}

#[tonic::async_trait]
impl ExternalProcessor for ExtProcService {
    type ProcessStream =
        Pin<Box<dyn Stream<Item = Result<ProcessingResponse, Status>> + Send + 'static>>;

    async fn process(
        &self,
        request: Request<tonic::Streaming<ProcessingRequest>>,
    ) -> Result<Response<Self::ProcessStream>, Status> {
        let mut stream = request.into_inner();
        let (tx, rx) = mpsc::channel(32);
        let processor = self.processor.clone();

        tokio::spawn(async move {
            loop {
                let req = match stream.message().await {
                    Ok(Some(req)) => req,
                    Ok(None) => break,
                    Err(status) => {
                        warn!("ext_proc stream closed with error: {}", status);
                        break;
                    }
                };

                let response = dispatch(processor.as_ref(), &req).await;
                if tx.send(Ok(response)).await.is_err() {
                    break;
                }
            }
        });

        Ok(Response::new(Box::pin(ReceiverStream::new(rx))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envoy::service::ext_proc::v3::{
        processing_response::Response as ProcessingResponseType, HttpBody, HttpHeaders,
    };
    use crate::processor::ProcessingError;
    use async_trait::async_trait;

    struct FailingProcessor;

    #[async_trait]
    impl ExtProcessor for FailingProcessor {
        async fn process_request_headers(
            &self,
            _req: &ProcessingRequest,
        ) -> Result<ProcessingResponse, ProcessingError> {
            Err(ProcessingError::Failed("boom".to_string()))
        }

        async fn process_response_headers(
            &self,
            _req: &ProcessingRequest,
        ) -> Result<ProcessingResponse, ProcessingError> {
            Err(ProcessingError::Failed("boom".to_string()))
        }

        async fn process_request_body(
            &self,
            _req: &ProcessingRequest,
        ) -> Result<ProcessingResponse, ProcessingError> {
            Err(ProcessingError::Failed("boom".to_string()))
        }

        async fn process_response_body(
            &self,
            _req: &ProcessingRequest,
        ) -> Result<ProcessingResponse, ProcessingError> {
            Err(ProcessingError::Failed("boom".to_string()))
        }
    }

    #[tokio::test]
    async fn test_failed_request_headers_continue() {
        let req = ProcessingRequest {
            request: Some(ProcessingRequestType::RequestHeaders(HttpHeaders::default())),
            ..Default::default()
        };
        let response = dispatch(&FailingProcessor, &req).await;
        assert_eq!(response, mutations::pass_through_headers(true));
    }

    #[tokio::test]
    async fn test_failed_body_phases_continue() {
        let req = ProcessingRequest {
            request: Some(ProcessingRequestType::ResponseBody(HttpBody::default())),
            ..Default::default()
        };
        let response = dispatch(&FailingProcessor, &req).await;
        assert!(matches!(
            response.response,
            Some(ProcessingResponseType::ResponseBody(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_request_gets_default_response() {
        let response = dispatch(&FailingProcessor, &ProcessingRequest::default()).await;
        assert_eq!(response, ProcessingResponse::default());
    }
}
