//! Shared HTTP transport.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use bookstall_core::{RemoteError, RemoteResult};
use bookstall_session::Session;

use crate::config::ApiConfig;

/// Whether an endpoint requires the session credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// No credential attached (catalog reads, login, registration).
    Public,
    /// Bearer token required; a missing token fails locally with
    /// `RemoteError::Unauthenticated` before any request is built.
    Session,
}

/// Thin wrapper over `reqwest::Client` shared by all resource clients.
///
/// Every response is reduced to the uniform remote-error taxonomy: non-2xx
/// statuses become `RemoteError::Status` without inspecting the body,
/// transport failures become `RemoteError::Network`, and body decoding
/// failures become `RemoteError::Decode`.
#[derive(Clone)]
pub struct Http {
    client: Client,
    base_url: String,
    session: Arc<Session>,
}

impl Http {
    pub fn new(config: &ApiConfig, session: Arc<Session>) -> RemoteResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str, auth: Auth) -> RemoteResult<RequestBuilder> {
        let builder = self.client.request(method, self.url(path));
        match auth {
            Auth::Public => Ok(builder),
            Auth::Session => {
                let token = self.session.token().ok_or(RemoteError::Unauthenticated)?;
                Ok(builder.bearer_auth(token.as_str()))
            }
        }
    }

    async fn send(&self, path: &str, builder: RequestBuilder) -> RemoteResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(path, status = status.as_u16(), "request failed");
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> RemoteResult<T> {
        response
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> RemoteResult<T> {
        let response = self.send(path, self.request(Method::GET, path, auth)?).await?;
        Self::decode(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, auth: Auth) -> RemoteResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path, auth)?.json(body);
        let response = self.send(path, builder).await?;
        Self::decode(response).await
    }

    /// POST whose response body is irrelevant to the caller.
    pub async fn post_no_content<B>(&self, path: &str, body: &B, auth: Auth) -> RemoteResult<()>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path, auth)?.json(body);
        self.send(path, builder).await?;
        Ok(())
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B, auth: Auth) -> RemoteResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PATCH, path, auth)?.json(body);
        let response = self.send(path, builder).await?;
        Self::decode(response).await
    }

    /// PATCH whose response body is irrelevant to the caller.
    pub async fn patch_no_content<B>(&self, path: &str, body: &B, auth: Auth) -> RemoteResult<()>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PATCH, path, auth)?.json(body);
        self.send(path, builder).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str, auth: Auth) -> RemoteResult<()> {
        self.send(path, self.request(Method::DELETE, path, auth)?)
            .await?;
        Ok(())
    }
}
