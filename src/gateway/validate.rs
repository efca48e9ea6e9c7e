//! Request validation performed before forwarding.
//!
//! Bodies are deserialized into the structs below and checked with `garde`.
//! Fields the server reads but the gateway does not check are kept so the
//! forwarded body is the one the client sent.

use chrono::NaiveDateTime;
use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::gateway::error::GatewayError;

/// Booking `state` values accepted by the listing endpoints.
pub const BOOKING_STATES: [&str; 6] =
    ["ALL", "PAST", "FUTURE", "CURRENT", "WAITING", "REJECTED"];

fn not_blank(value: &str, _ctx: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("must not be blank"));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[garde(custom(not_blank))]
    pub name: String,
    #[garde(custom(not_blank), email)]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(email)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[garde(custom(not_blank))]
    pub name: String,
    #[garde(custom(not_blank))]
    pub description: String,
    #[serde(default)]
    #[garde(required)]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub request_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewComment {
    #[garde(custom(not_blank))]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewItemRequest {
    #[garde(custom(not_blank))]
    pub description: String,
}

/// Booking body, validated against the current time.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[garde(context(NaiveDateTime))]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    #[serde(default)]
    #[garde(required)]
    pub item_id: Option<i32>,
    #[garde(custom(starts_before(&self.end)))]
    pub start: NaiveDateTime,
    #[garde(custom(ends_in_future))]
    pub end: NaiveDateTime,
}

fn starts_before(
    end: &NaiveDateTime,
) -> impl FnOnce(&NaiveDateTime, &NaiveDateTime) -> garde::Result + '_ {
    move |start, now| {
        if start < now {
            return Err(garde::Error::new("must not be in the past"));
        }
        if start >= end {
            return Err(garde::Error::new("must be before end"));
        }
        Ok(())
    }
}

fn ends_in_future(end: &NaiveDateTime, now: &NaiveDateTime) -> garde::Result {
    if end <= now {
        return Err(garde::Error::new("must be in the future"));
    }
    Ok(())
}

/// Offset paging; signed so a negative `from` is reported instead of failing to parse.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Paging {
    #[serde(default)]
    #[garde(range(min = 0))]
    pub from: i64,
    #[serde(default = "default_size")]
    #[garde(range(min = 1))]
    pub size: i64,
}

fn default_size() -> i64 {
    10
}

/// Query of the booking listings; `state` is checked by [`booking_state`].
#[derive(Debug, Deserialize, Validate)]
pub struct BookingListQuery {
    #[serde(default)]
    #[garde(skip)]
    pub state: Option<String>,
    #[serde(default)]
    #[garde(range(min = 0))]
    pub from: i64,
    #[serde(default = "default_size")]
    #[garde(range(min = 1))]
    pub size: i64,
}

/// Query of the item search.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SearchQuery {
    #[serde(default)]
    #[garde(skip)]
    pub text: String,
    #[serde(default)]
    #[garde(range(min = 0))]
    pub from: i64,
    #[serde(default = "default_size")]
    #[garde(range(min = 1))]
    pub size: i64,
}

/// Checks a booking `state` value, defaulting to `ALL`.
///
/// # Returns
/// - `Ok(&str)` - One of [`BOOKING_STATES`]
/// - `Err(GatewayError::BadRequest)` - `Unknown state: <value>`
pub fn booking_state(state: Option<&str>) -> Result<&'static str, GatewayError> {
    let state = state.unwrap_or("ALL");

    BOOKING_STATES
        .iter()
        .find(|known| **known == state)
        .copied()
        .ok_or_else(|| GatewayError::BadRequest(format!("Unknown state: {}", state)))
}
