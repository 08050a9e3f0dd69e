use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::auth::TokenClaims;
use crate::error::{ClientError, ClientResult, ErrorResponse};
use crate::infrastructure::session::{SessionStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

const REFRESH_PATH: &str = "/auth/refresh/";

/// Body returned by the token-refresh endpoint.
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
}

/// Caller-supplied request options. Caller headers win over the injected
/// defaults on key collision.
#[derive(Debug, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

/// HTTP client for the platform's API. Attaches the stored bearer token to
/// every request and recovers exactly once from an expired-token rejection:
/// one refresh attempt, one retry, never more.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            base_url: normalize(base_url),
            http: reqwest::Client::new(),
            store,
        }
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        store: Arc<dyn SessionStore>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: normalize(base_url),
            http,
            store,
        })
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Perform a request against the backend. On a 401, attempt one token
    /// refresh; if it succeeds, reissue the original request once and return
    /// that response whatever its status. If the refresh fails the session
    /// has already been cleared and the original 401 is handed back.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> ClientResult<Response> {
        let response = self.send(method.clone(), path, &options).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        tracing::debug!(path, "request rejected as unauthorized, refreshing token");
        if self.refresh().await {
            return self.send(method, path, &options).await;
        }

        Ok(response)
    }

    /// Exchange the stored refresh token for a new access token. Failures of
    /// any kind clear the whole session and come back as `false`; this never
    /// retries and never refreshes recursively.
    pub async fn refresh(&self) -> bool {
        let Some(refresh_token) = self.store.get(REFRESH_TOKEN_KEY) else {
            self.store.clear();
            return false;
        };

        let url = format!("{}{}", self.base_url, REFRESH_PATH);
        let body = serde_json::json!({ "refresh": refresh_token });
        let response = match self.http.post(&url).json(&body).send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%error, "token refresh request failed");
                self.store.clear();
                return false;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "token refresh rejected");
            self.store.clear();
            return false;
        }

        match response.json::<RefreshResponse>().await {
            Ok(refreshed) => {
                self.store.set(ACCESS_TOKEN_KEY, &refreshed.access);
                tracing::debug!("access token refreshed");
                true
            }
            Err(error) => {
                tracing::warn!(%error, "token refresh returned an unreadable body");
                self.store.clear();
                false
            }
        }
    }

    /// Whether the stored access token is present, decodable, and unexpired.
    /// An expired token kicks off a fire-and-forget refresh; callers observe
    /// the outcome by re-checking once it lands. No network call otherwise.
    pub async fn is_authenticated(&self) -> bool {
        let Some(token) = self.store.get(ACCESS_TOKEN_KEY) else {
            return false;
        };

        let claims = match TokenClaims::decode(&token) {
            Ok(claims) => claims,
            Err(error) => {
                tracing::warn!(%error, "stored access token is not decodable");
                return false;
            }
        };

        if claims.is_expired(Utc::now().timestamp()) {
            let client = self.clone();
            tokio::spawn(async move {
                client.refresh().await;
            });
            return false;
        }

        true
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self
            .request(Method::GET, path, RequestOptions::default())
            .await?;
        decode_response(response).await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = serde_json::to_value(body).map_err(|e| ClientError::Decode(e.to_string()))?;
        let options = RequestOptions {
            body: Some(body),
            ..Default::default()
        };
        let response = self.request(Method::POST, path, options).await?;
        decode_response(response).await
    }

    /// POST without touching the stored session, for login and registration.
    pub async fn post_json_public<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(&url).json(body).send().await?;
        decode_response(response).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        options: &RequestOptions,
    ) -> ClientResult<Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, &url)
            .headers(self.auth_headers(&options.headers));
        if let Some(body) = &options.body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    fn auth_headers(&self, extra: &HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let bearer = match self.store.get(ACCESS_TOKEN_KEY) {
            Some(token) => format!("Bearer {}", token),
            None => String::new(),
        };
        if let Ok(value) = HeaderValue::from_str(&bearer) {
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in extra {
            headers.insert(name.clone(), value.clone());
        }

        headers
    }
}

/// Decode a success body into its typed record, or map the failure into the
/// error taxonomy: 401 means the session is gone, anything else non-2xx
/// carries the backend's message when it has one.
async fn decode_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthenticated(
            "session expired or missing".to_string(),
        ));
    }

    if !status.is_success() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(ErrorResponse::into_message)
            .unwrap_or_else(|| "request failed".to_string());
        return Err(ClientError::Request {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(format!("unexpected response shape: {}", e)))
}

fn normalize(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}
