use crate::session::TokenSlot;
use crate::{Error, Result};
use codegate_types::{ActivationCode, CodeDuration, CodeStatus, ListPage};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// The backend collaborator, as consumed by the ops layer.
///
/// Implemented by [`HttpApi`] against the real service and by in-memory
/// fakes in tests.
pub trait ActivationApi {
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<String>> + Send;

    fn list_codes(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<ListPage<ActivationCode>>> + Send;

    fn fetch_code(&self, id: u64) -> impl Future<Output = Result<ActivationCode>> + Send;

    fn create_code(
        &self,
        duration: CodeDuration,
        max_accounts: u32,
    ) -> impl Future<Output = Result<ActivationCode>> + Send;

    fn set_status(
        &self,
        id: u64,
        status: CodeStatus,
    ) -> impl Future<Output = Result<()>> + Send;
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCodeRequest {
    duration: CodeDuration,
    max_accounts: u32,
}

#[derive(Serialize)]
struct SetStatusRequest {
    status: CodeStatus,
}

/// Error envelope the backend uses for non-2xx answers.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP implementation of [`ActivationApi`] over reqwest.
#[derive(Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
    token: TokenSlot,
}

impl HttpApi {
    pub fn new(server_url: &str, token: TokenSlot) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: server_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token, if one is currently held.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.get() {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());

        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl ActivationApi for HttpApi {
    async fn login(&self, username: &str, password: &str) -> Result<String> {
        debug!(username, "posting login request");

        let response = self
            .http
            .post(self.url("/api/login"))
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let body: LoginResponse = Self::check(response).await?.json().await?;
        Ok(body.token)
    }

    async fn list_codes(&self, page: u32, page_size: u32) -> Result<ListPage<ActivationCode>> {
        debug!(page, page_size, "fetching activation-code page");

        let request = self
            .http
            .get(self.url("/api/activation-codes"))
            .query(&[("page", page), ("pageSize", page_size)]);

        let response = self.authorize(request).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn fetch_code(&self, id: u64) -> Result<ActivationCode> {
        let request = self.http.get(self.url(&format!("/api/activation-codes/{}", id)));

        let response = self.authorize(request).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn create_code(
        &self,
        duration: CodeDuration,
        max_accounts: u32,
    ) -> Result<ActivationCode> {
        debug!(days = duration.days(), max_accounts, "creating activation code");

        let request = self
            .http
            .post(self.url("/api/activation-codes"))
            .json(&CreateCodeRequest {
                duration,
                max_accounts,
            });

        let response = self.authorize(request).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn set_status(&self, id: u64, status: CodeStatus) -> Result<()> {
        debug!(id, %status, "updating activation-code status");

        let request = self
            .http
            .put(self.url(&format!("/api/activation-codes/{}/status", id)))
            .json(&SetStatusRequest { status });

        let response = self.authorize(request).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
