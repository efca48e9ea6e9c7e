//! Forwarding of validated requests to the ShareIt server.

use axum::{
    http::{header::CONTENT_TYPE, Method},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{extract::SHARER_USER_ID_HEADER, gateway::error::GatewayError};

/// HTTP client bound to the server's base URL.
#[derive(Clone)]
pub struct ServerClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServerClient {
    /// Creates a client that does not follow redirects.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Starts a request for `path` on the server.
    pub fn request(&self, method: Method, path: &str) -> Forward {
        Forward {
            description: format!("{} {}", method, path),
            builder: self
                .http
                .request(method, format!("{}{}", self.base_url, path)),
        }
    }
}

/// Request being prepared for forwarding.
pub struct Forward {
    description: String,
    builder: reqwest::RequestBuilder,
}

impl Forward {
    /// Passes the acting user through in `X-Sharer-User-Id`.
    pub fn user(mut self, user_id: i32) -> Self {
        self.builder = self.builder.header(SHARER_USER_ID_HEADER, user_id);
        self
    }

    pub fn query<T: Serialize + ?Sized>(mut self, query: &T) -> Self {
        self.builder = self.builder.query(query);
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.builder = self.builder.json(body);
        self
    }

    /// Sends the request and relays the server's status and body.
    ///
    /// # Returns
    /// - `Ok(Response)` - Server answered, whatever its status
    /// - `Err(GatewayError::Upstream)` - Server unreachable or body unreadable
    pub async fn send(self) -> Result<Response, GatewayError> {
        tracing::info!("Forwarding {}", self.description);

        let upstream = self.builder.send().await?;
        let status = upstream.status();
        let body = upstream.bytes().await?;

        if body.is_empty() {
            return Ok(status.into_response());
        }

        Ok((status, [(CONTENT_TYPE, "application/json")], body).into_response())
    }
}
