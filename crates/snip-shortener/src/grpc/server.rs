use std::sync::Arc;

use snip_core::{Shortener, ShortenerError};
use snip_proto_schema::v1 as proto;
use snip_proto_schema::v1::url_shortener_service_server::UrlShortenerService;
use tonic::{Request, Response, Status};
use tracing::{debug, error};

use super::status::{into_status, status_code};
use crate::error::Severity;

/// Serves [`UrlShortenerService`] on top of any [`Shortener`].
#[derive(Clone)]
pub struct ShortenerGrpcServer {
    shortener: Arc<dyn Shortener>,
}

impl ShortenerGrpcServer {
    pub fn new(shortener: Arc<dyn Shortener>) -> Self {
        Self { shortener }
    }
}

fn reject(method: &'static str, error: ShortenerError) -> Status {
    let code = status_code(&error);
    match Severity::of(&error) {
        Severity::Expected | Severity::Client => {
            debug!(method, %error, ?code, "rpc failed");
        }
        Severity::Server => {
            error!(method, %error, ?code, "rpc failed");
        }
    }
    into_status(error)
}

#[tonic::async_trait]
impl UrlShortenerService for ShortenerGrpcServer {
    async fn create_short_url(
        &self,
        request: Request<proto::CreateShortUrlRequest>,
    ) -> Result<Response<proto::CreateShortUrlResponse>, Status> {
        let proto::CreateShortUrlRequest { url } = request.into_inner();
        if url.trim().is_empty() {
            return Err(Status::invalid_argument("url must not be empty"));
        }

        let code = self
            .shortener
            .create_or_get(&url)
            .await
            .map_err(|e| reject("create_short_url", e))?;

        Ok(Response::new(proto::CreateShortUrlResponse {
            short_url: code.to_string(),
        }))
    }

    async fn get_original_url(
        &self,
        request: Request<proto::GetOriginalUrlRequest>,
    ) -> Result<Response<proto::GetOriginalUrlResponse>, Status> {
        let proto::GetOriginalUrlRequest { short_url } = request.into_inner();

        let url = self
            .shortener
            .get_full_url(&short_url)
            .await
            .map_err(|e| reject("get_original_url", e))?;

        Ok(Response::new(proto::GetOriginalUrlResponse { url }))
    }
}
