//! Extractor for the `X-Sharer-User-Id` header identifying the acting user.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::model::api::ErrorDto;

/// Name of the header carrying the id of the user performing the request.
pub const SHARER_USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Id of the user performing the request, read from `X-Sharer-User-Id`.
///
/// Rejects with 400 Bad Request when the header is missing or not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerUserId(pub i32);

/// Rejection for a missing or malformed `X-Sharer-User-Id` header.
#[derive(Debug)]
pub struct SharerUserIdRejection(pub String);

impl IntoResponse for SharerUserIdRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorDto { error: self.0 })).into_response()
    }
}

impl<S> FromRequestParts<S> for SharerUserId
where
    S: Send + Sync,
{
    type Rejection = SharerUserIdRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts.headers.get(SHARER_USER_ID_HEADER).ok_or_else(|| {
            SharerUserIdRejection(format!("Missing required header {}", SHARER_USER_ID_HEADER))
        })?;

        value
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<i32>().ok())
            .map(SharerUserId)
            .ok_or_else(|| {
                SharerUserIdRejection(format!(
                    "Header {} must be an integer user id",
                    SHARER_USER_ID_HEADER
                ))
            })
    }
}
