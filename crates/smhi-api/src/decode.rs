//! Response decoding: structured JSON or raw byte passthrough.

use serde::de::DeserializeOwned;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::SmhiError;
use crate::transport::RawResponse;

/// Decodes a JSON body into `T`.
///
/// An empty (or whitespace-only) body yields `T::default()`. Fields missing
/// from the payload take their default value, so "absent" and "zero" are
/// indistinguishable in the result.
///
/// # Errors
///
/// Returns `SmhiError::Decode` if the body is not valid JSON for `T`.
pub fn decode_json<T>(body: &[u8]) -> Result<T, SmhiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(SmhiError::Decode)
}

/// Reads the whole body of `raw` and decodes it as JSON.
pub(crate) async fn read_json<T>(raw: RawResponse) -> Result<T, SmhiError>
where
    T: DeserializeOwned + Default,
{
    let body = raw
        .response
        .bytes()
        .await
        .map_err(SmhiError::from_transport)?;
    tracing::debug!(body_len = body.len(), "Response body received");
    tracing::trace!(
        body_preview = %String::from_utf8_lossy(body.get(..body.len().min(500)).unwrap_or_default()),
        "Response body preview"
    );
    decode_json(&body)
}

/// Streams the body of `raw` into `sink` without interpreting it.
///
/// Returns the number of bytes written. The sink is flushed at the end.
pub(crate) async fn copy_raw<W>(raw: RawResponse, sink: &mut W) -> Result<u64, SmhiError>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut response = raw.response;
    let mut written = 0_u64;
    while let Some(chunk) = response.chunk().await.map_err(SmhiError::from_transport)? {
        sink.write_all(&chunk).await.map_err(SmhiError::Sink)?;
        written = written.saturating_add(u64::try_from(chunk.len()).unwrap_or(u64::MAX));
    }
    sink.flush().await.map_err(SmhiError::Sink)?;
    tracing::debug!(written, "Response body copied to sink");
    Ok(written)
}
