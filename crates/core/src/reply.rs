//! Reply envelope and the response checker shared by every endpoint.
//!
//! Every Minefort endpoint answers with the same JSON envelope:
//!
//! ```json
//! { "status": "OK", "time": 12, "result": { ... }, "pagination": { "more": false, "total": 3 } }
//! { "status": "INVALID_INPUT", "time": 3, "error": { "body": [ ... ] } }
//! ```
//!
//! [`Reply`] is the decoded envelope as a sum type: exactly one of the two
//! variants is active, and only the `Ok` variant carries a result.
//! [`check_response`] turns a reply into the success payload or an [`ApiError`].

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

use crate::status::{ApiError, ErrorBody, ResponseStatus};

/// Pagination block returned by the list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub more: bool,
    pub total: u64,
}

/// Successful reply payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Success<T> {
    pub result: T,
    pub pagination: Option<Pagination>,
    pub time: Option<f64>,
}

/// Failed reply: any status other than `OK`.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub status: ResponseStatus,
    pub error: Option<ErrorBody>,
    pub time: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Ok(Success<T>),
    Failed(Failure),
}

impl<T> Reply<T> {
    pub fn status(&self) -> ResponseStatus {
        match self {
            Reply::Ok(_) => ResponseStatus::Ok,
            Reply::Failed(failure) => failure.status.clone(),
        }
    }
}

// Envelope exactly as it appears on the wire. The result stays untyped until
// the status is known, so failed replies never have to match `T`.
#[derive(Deserialize)]
struct RawReply {
    status: ResponseStatus,
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    pagination: Option<Pagination>,
    #[serde(default)]
    time: Option<f64>,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Reply<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawReply::deserialize(deserializer)?;

        if !raw.status.is_ok() {
            // The status tag alone decides the error; an off-shape body only
            // loses its details.
            let error = raw
                .error
                .and_then(|value| serde_json::from_value::<ErrorBody>(value).ok());
            return Ok(Reply::Failed(Failure {
                status: raw.status,
                error,
                time: raw.time,
            }));
        }

        // Action endpoints answer `{}` or nothing at all; a missing result is
        // accepted whenever `T` itself can be built from `null`.
        let result = T::deserialize(raw.result.unwrap_or(serde_json::Value::Null))
            .map_err(|e| D::Error::custom(format!("invalid result: {e}")))?;

        Ok(Reply::Ok(Success {
            result,
            pagination: raw.pagination,
            time: raw.time,
        }))
    }
}

/// Validate a reply: `OK` yields the success payload, every other tag yields
/// the matching [`ApiError`].
///
/// This is a pure function of its input. A single non-`OK` reply is final;
/// nothing is retried.
pub fn check_response<T>(reply: Reply<T>) -> Result<Success<T>, ApiError> {
    match reply {
        Reply::Ok(success) => Ok(success),
        Reply::Failed(failure) => Err(ApiError::from_status(failure.status, failure.error)),
    }
}

/// Shorthand for [`check_response`] when only the result matters.
pub fn check_result<T>(reply: Reply<T>) -> Result<T, ApiError> {
    check_response(reply).map(|success| success.result)
}
