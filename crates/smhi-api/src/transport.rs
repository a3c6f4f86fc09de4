//! Transport executor: one network attempt per call, status classification,
//! and guaranteed release of the response body.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::io::AsyncWrite;
use tracing::instrument;
use url::Url;

use crate::context::CallContext;
use crate::decode;
use crate::endpoint::Endpoint;
use crate::error::SmhiError;
use crate::request::RequestDescriptor;

/// Shared, immutable transport configuration.
///
/// Holds the HTTP client (and with it the connection pool) and the base URL.
/// Neither changes after construction, so one instance can serve concurrent
/// calls without locking.
#[derive(Debug, Clone)]
pub struct Transport {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base URL, always ending with `/`.
    base_url: Url,
}

/// A 2xx response whose body has not been read yet.
///
/// Owns the body: consuming it through the decoder or dropping it closes the
/// body exactly once.
#[derive(Debug)]
pub struct RawResponse {
    pub(crate) response: Response,
}

impl RawResponse {
    /// HTTP status code (always 2xx).
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Reads the whole body and decodes it as JSON into `T`.
    ///
    /// Wrap the call in [`CallContext::run`] to keep the body read under the
    /// same cancellation and deadline as the request.
    ///
    /// # Errors
    ///
    /// - `Network` if the body read fails.
    /// - `Decode` if the body is not valid JSON for `T`.
    pub async fn json<T>(self) -> Result<T, SmhiError>
    where
        T: DeserializeOwned + Default,
    {
        decode::read_json(self).await
    }

    /// Reads the whole body.
    ///
    /// # Errors
    ///
    /// Returns `Network` if the body read fails.
    pub async fn bytes(self) -> Result<Vec<u8>, SmhiError> {
        let body = self
            .response
            .bytes()
            .await
            .map_err(SmhiError::from_transport)?;
        Ok(body.to_vec())
    }

    /// Streams the body verbatim into `sink` and returns the byte count.
    ///
    /// # Errors
    ///
    /// - `Network` if the body read fails.
    /// - `Sink` if writing to or flushing `sink` fails.
    pub async fn copy_to<W>(self, sink: &mut W) -> Result<u64, SmhiError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        decode::copy_raw(self, sink).await
    }
}

impl Transport {
    /// Creates a transport from an HTTP client and a normalized base URL.
    pub(crate) const fn new(http_client: Client, base_url: Url) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Base URL every request path is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the request descriptor for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `SmhiError::MalformedUrl` if the path cannot be resolved.
    pub fn request(&self, endpoint: &Endpoint) -> Result<RequestDescriptor, SmhiError> {
        RequestDescriptor::get(&self.base_url, &endpoint.path())
    }

    /// Sends `descriptor` and classifies the response by status code.
    ///
    /// # Errors
    ///
    /// - `Cancelled` / `DeadlineExceeded` if `ctx` fires first.
    /// - `Network` on transport failure.
    /// - `Http` on any non-2xx status (the body is drained first).
    #[instrument(skip_all)]
    pub async fn execute(
        &self,
        descriptor: &RequestDescriptor,
        ctx: &CallContext,
    ) -> Result<RawResponse, SmhiError> {
        ctx.run(self.send(descriptor)).await
    }

    /// Fetches `endpoint` and decodes the JSON body into `T`.
    ///
    /// The deadline and cancellation in `ctx` cover both the request and the
    /// body read.
    ///
    /// # Errors
    ///
    /// Same as [`Transport::execute`], plus `MalformedUrl` and `Decode`.
    #[instrument(skip_all, fields(path = %endpoint.path()))]
    pub async fn get_json<T>(&self, endpoint: &Endpoint, ctx: &CallContext) -> Result<T, SmhiError>
    where
        T: DeserializeOwned + Default,
    {
        let descriptor = self.request(endpoint)?;
        ctx.run(async {
            let raw = self.send(&descriptor).await?;
            decode::read_json(raw).await
        })
        .await
    }

    /// Fetches `endpoint` and copies the body verbatim into `sink`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Same as [`Transport::execute`], plus `MalformedUrl` and `Sink`.
    #[instrument(skip_all, fields(path = %endpoint.path()))]
    pub async fn get_raw<W>(
        &self,
        endpoint: &Endpoint,
        ctx: &CallContext,
        sink: &mut W,
    ) -> Result<u64, SmhiError>
    where
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        let descriptor = self.request(endpoint)?;
        ctx.run(async {
            let raw = self.send(&descriptor).await?;
            decode::copy_raw(raw, sink).await
        })
        .await
    }

    /// Single network attempt without signal handling.
    async fn send(&self, descriptor: &RequestDescriptor) -> Result<RawResponse, SmhiError> {
        tracing::debug!(method = %descriptor.method(), url = %descriptor.url(), "SMHI API request");

        let response = self
            .http_client
            .request(descriptor.method().clone(), descriptor.url().clone())
            .send()
            .await
            .map_err(SmhiError::from_transport)?;

        let status = response.status();
        tracing::debug!(%status, "SMHI API response");

        if !status.is_success() {
            let drained = drain(response).await;
            tracing::debug!(%status, drained, "Error response body drained");
            return Err(SmhiError::Http { status });
        }

        Ok(RawResponse { response })
    }
}

/// Reads the remaining body so the connection can go back to the pool.
///
/// Returns the number of bytes read. A read failure only means the
/// connection is closed instead of reused, so it is not reported.
async fn drain(response: Response) -> usize {
    response.bytes().await.map_or(0, |body| body.len())
}
