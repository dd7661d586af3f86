use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiEnvelope, ApiError, ApiResult},
    config,
};

/// Characters escaped when a value is placed in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: config::normalize_base_url(&base_url.into()),
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn endpoint(&self, path: &str) -> String {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        };
        format!("{}/api/{}", base, path.trim_start_matches('/'))
    }

    /// Sends one request. Transport failures become `NETWORK_ERROR`.
    pub(super) async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let request = builder
            .build()
            .map_err(|e| ApiError::network(format!("Invalid request: {}", e)))?;
        debug!("{} {}", request.method(), request.url());

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(mocked) = mock::respond(&request) {
            return mocked;
        }

        self.client.execute(request).await.map_err(|e| {
            warn!("Request failed: {}", e);
            ApiError::network(e.to_string())
        })
    }

    /// Reads the `{success, data, message}` envelope. Non-2xx and
    /// `success: false` both map to `REQUEST_FAILED`.
    pub(super) async fn read_envelope<T: DeserializeOwned>(
        response: Response,
        fallback: &str,
    ) -> ApiResult<Option<T>> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if !status.is_success() {
            let error = ApiError::from_failure_body(status.as_u16(), &body, fallback);
            warn!("API error {}: {}", status.as_u16(), error.error);
            return Err(error);
        }

        let envelope: ApiEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| ApiError::parse(e.to_string()))?;
        if envelope.success == Some(false) {
            let message = envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            warn!("API reported failure: {}", message);
            return Err(ApiError::request_failed(message));
        }
        Ok(envelope.data)
    }

    pub(super) async fn read_list<T: DeserializeOwned>(
        response: Response,
        fallback: &str,
    ) -> ApiResult<Vec<T>> {
        Ok(Self::read_envelope::<Vec<T>>(response, fallback)
            .await?
            .unwrap_or_default())
    }

    pub(super) async fn read_item<T: DeserializeOwned>(
        response: Response,
        fallback: &str,
    ) -> ApiResult<T> {
        Self::read_envelope::<T>(response, fallback)
            .await?
            .ok_or_else(|| ApiError::parse("response carried no data"))
    }

    pub(super) async fn read_empty(response: Response, fallback: &str) -> ApiResult<()> {
        Self::read_envelope::<serde::de::IgnoredAny>(response, fallback)
            .await
            .map(|_| ())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock::{register_mock, MockResponse, TestResponder};
