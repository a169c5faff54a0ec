//! Shared HTTP transport used by every endpoint group.
//!
//! Each call builds one URL from path segments, attaches the typed query
//! string and optional JSON body, sends a single request and hands back the
//! decoded body. There are no retries.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use url::Url;

use crate::error::{QdrantError, QdrantResult};
use crate::models::NoParams;

#[derive(Debug)]
pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) api_key: Option<String>,
    pub(crate) log_requests: bool,
    pub(crate) raise_on_error: bool,
}

/// Response after the raise-on-error policy has been applied.
struct RawResponse {
    is_json: bool,
    body: Vec<u8>,
}

impl ClientInner {
    /// Append escaped path segments to the base URL.
    pub(crate) fn url(&self, segments: &[&str]) -> QdrantResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                QdrantError::Config(format!("base URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET without query parameters.
    pub(crate) async fn get(&self, segments: &[&str]) -> QdrantResult<Value> {
        self.get_with(segments, &NoParams {}).await
    }

    pub(crate) async fn get_with<Q: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> QdrantResult<Value> {
        self.call(Method::GET, segments, query, None::<&NoParams>)
            .await
    }

    /// DELETE without query parameters or body.
    pub(crate) async fn delete(&self, segments: &[&str]) -> QdrantResult<Value> {
        self.call(Method::DELETE, segments, &NoParams {}, None::<&NoParams>)
            .await
    }

    /// POST with no request body.
    pub(crate) async fn post_empty<Q: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> QdrantResult<Value> {
        self.call(Method::POST, segments, query, None::<&NoParams>)
            .await
    }

    /// Send a JSON body with the given verb.
    pub(crate) async fn send_json<Q, B>(
        &self,
        method: Method,
        segments: &[&str],
        query: &Q,
        body: &B,
    ) -> QdrantResult<Value>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        self.call(method, segments, query, Some(body)).await
    }

    async fn call<Q, B>(
        &self,
        method: Method,
        segments: &[&str],
        query: &Q,
        body: Option<&B>,
    ) -> QdrantResult<Value>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let raw = self.execute(method, segments, query, body).await?;
        Self::decode(raw)
    }

    /// GET a binary body and stream it into `filepath` (created or truncated).
    /// Returns the number of bytes written. The body is never logged.
    pub(crate) async fn download(&self, segments: &[&str], filepath: &Path) -> QdrantResult<u64> {
        let (url, mut resp) = self
            .send(Method::GET, segments, &NoParams {}, None::<&NoParams>)
            .await?;
        let status = resp.status();
        if self.raise_on_error && !status.is_success() {
            let body = resp.bytes().await?;
            return Err(Self::api_error(status, &body));
        }

        let target = std::path::absolute(filepath)?;
        let mut file = tokio::fs::File::create(&target).await?;
        let mut written: u64 = 0;
        while let Some(chunk) = resp.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!(
            url = %url,
            path = %target.display(),
            bytes = written,
            status = status.as_u16(),
            "snapshot written"
        );
        if self.log_requests {
            info!(status = status.as_u16(), bytes = written, "response");
        }
        Ok(written)
    }

    /// Build and send one request. The response body is left unread.
    async fn send<Q, B>(
        &self,
        method: Method,
        segments: &[&str],
        query: &Q,
        body: Option<&B>,
    ) -> QdrantResult<(Url, reqwest::Response)>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        let payload = body.map(serde_json::to_value).transpose()?;

        let mut builder = self.http.request(method.clone(), url.clone()).query(query);
        if let Some(ref payload) = payload {
            builder = builder.json(payload);
        }

        debug!(method = %method, url = %url, "sending request");
        if self.log_requests {
            let body = payload
                .as_ref()
                .map(Value::to_string)
                .unwrap_or_default();
            info!(method = %method, url = %url, body = %body, "request");
        }

        let resp = builder.send().await?;
        debug!(method = %method, url = %url, status = resp.status().as_u16(), "received response");
        Ok((url, resp))
    }

    async fn execute<Q, B>(
        &self,
        method: Method,
        segments: &[&str],
        query: &Q,
        body: Option<&B>,
    ) -> QdrantResult<RawResponse>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let (_, resp) = self.send(method, segments, query, body).await?;
        let status = resp.status();
        let is_json = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.contains("json"))
            .unwrap_or(false);
        let body = resp.bytes().await?.to_vec();

        if self.log_requests {
            info!(
                status = status.as_u16(),
                body = %String::from_utf8_lossy(&body),
                "response"
            );
        }

        if self.raise_on_error && !status.is_success() {
            return Err(Self::api_error(status, &body));
        }

        Ok(RawResponse {
            is_json,
            body,
        })
    }

    fn api_error(status: StatusCode, body: &[u8]) -> QdrantError {
        QdrantError::Api {
            status: status.as_u16(),
            message: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// JSON bodies are parsed, empty bodies become `null`, anything else
    /// (e.g. Prometheus text) is returned as a string.
    fn decode(raw: RawResponse) -> QdrantResult<Value> {
        if raw.body.is_empty() {
            return Ok(Value::Null);
        }
        if raw.is_json {
            return Ok(serde_json::from_slice(&raw.body)?);
        }
        Ok(Value::String(
            String::from_utf8_lossy(&raw.body).into_owned(),
        ))
    }
}
