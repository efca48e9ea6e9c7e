//! Gateway error type and HTTP response mapping.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{config_error::ConfigError, model::api::ErrorDto};

#[derive(Error, Debug)]
pub enum GatewayError {
    /// Request failed validation before reaching the server.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Server could not be reached or its response could not be read.
    ///
    /// Results in 500 Internal Server Error with details logged.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Missing or invalid environment configuration.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure outside the request itself, such as binding the listener.
    #[error("{0}")]
    InternalError(String),
}

impl From<garde::Report> for GatewayError {
    fn from(report: garde::Report) -> Self {
        GatewayError::BadRequest(report.to_string().trim_end().to_string())
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        GatewayError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for GatewayError {
    fn from(rejection: PathRejection) -> Self {
        GatewayError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for GatewayError {
    fn from(rejection: QueryRejection) -> Self {
        GatewayError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => {
                tracing::error!("{}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
