//! Status tags and structured error bodies carried by every Minefort reply.

use serde::{Deserialize, Serialize};

/// Discriminator sent in the `status` field of every reply.
///
/// Tags the API adds later are kept verbatim in [`ResponseStatus::Unknown`]
/// instead of failing the decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResponseStatus {
    Ok,
    NotAuthenticated,
    InvalidState,
    InsufficientBalance,
    ItemNotFound,
    InvalidInput,
    InvalidCredentials,
    ServerNameAlreadyInUse,
    InternalError,
    ServerAccountLimit,
    NoPermission,
    EndpointNotFound,
    Unknown(String),
}

impl ResponseStatus {
    /// Wire representation of the tag.
    pub fn as_str(&self) -> &str {
        match self {
            ResponseStatus::Ok => "OK",
            ResponseStatus::NotAuthenticated => "NOT_AUTHENTICATED",
            ResponseStatus::InvalidState => "INVALID_STATE",
            ResponseStatus::InsufficientBalance => "INSUFFICIENT_BALANCE",
            ResponseStatus::ItemNotFound => "ITEM_NOT_FOUND",
            ResponseStatus::InvalidInput => "INVALID_INPUT",
            ResponseStatus::InvalidCredentials => "INVALID_CREDENTIALS",
            ResponseStatus::ServerNameAlreadyInUse => "SERVER_NAME_ALREADY_IN_USE",
            ResponseStatus::InternalError => "INTERNAL_ERROR",
            ResponseStatus::ServerAccountLimit => "SERVER_ACCOUNT_LIMIT",
            ResponseStatus::NoPermission => "NO_PERMISSION",
            ResponseStatus::EndpointNotFound => "ENDPOINT_NOT_FOUND",
            ResponseStatus::Unknown(tag) => tag,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ResponseStatus::Ok)
    }
}

impl From<String> for ResponseStatus {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "OK" => ResponseStatus::Ok,
            "NOT_AUTHENTICATED" => ResponseStatus::NotAuthenticated,
            "INVALID_STATE" => ResponseStatus::InvalidState,
            "INSUFFICIENT_BALANCE" => ResponseStatus::InsufficientBalance,
            "ITEM_NOT_FOUND" => ResponseStatus::ItemNotFound,
            "INVALID_INPUT" => ResponseStatus::InvalidInput,
            "INVALID_CREDENTIALS" => ResponseStatus::InvalidCredentials,
            "SERVER_NAME_ALREADY_IN_USE" => ResponseStatus::ServerNameAlreadyInUse,
            "INTERNAL_ERROR" => ResponseStatus::InternalError,
            "SERVER_ACCOUNT_LIMIT" => ResponseStatus::ServerAccountLimit,
            "NO_PERMISSION" => ResponseStatus::NoPermission,
            "ENDPOINT_NOT_FOUND" => ResponseStatus::EndpointNotFound,
            _ => ResponseStatus::Unknown(tag),
        }
    }
}

impl From<ResponseStatus> for String {
    fn from(status: ResponseStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured error payload attached to some failed replies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub body: Vec<ValidationFailure>,
}

impl ErrorBody {
    /// Message of the first validation failure, if any.
    pub fn first_message(&self) -> Option<&str> {
        self.body.first().map(|failure| failure.message.as_str())
    }
}

/// A single input validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub message: String,
    #[serde(default)]
    pub path: Vec<PathSegment>,
    #[serde(rename = "type", default)]
    pub failure_type: String,
    #[serde(default)]
    pub context: ValidationContext,
}

/// Key or index into the request body that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(u64),
    Key(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationContext {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default)]
    pub limit: Option<serde_json::Value>,
    #[serde(default)]
    pub valids: Option<Vec<String>>,
}

/// Failure reported by the API through a non-`OK` status tag.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("not authenticated")]
    NotAuthenticated,

    #[error("invalid state")]
    InvalidState,

    #[error("insufficient balance")]
    InsufficientBalance,

    #[error("item not found")]
    ItemNotFound,

    #[error("invalid input{}", input_detail(.failures))]
    InvalidInput { failures: Vec<ValidationFailure> },

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("server name already in use")]
    ServerNameAlreadyInUse,

    #[error("internal error")]
    InternalError,

    #[error("server account limit")]
    ServerAccountLimit,

    #[error("no permission")]
    NoPermission,

    #[error("endpoint not found")]
    EndpointNotFound,

    /// Tag outside the known table. `OK` only lands here when a caller
    /// builds the error by hand; the checker never does.
    #[error("unknown error")]
    Unknown(String),
}

fn input_detail(failures: &[ValidationFailure]) -> String {
    failures
        .first()
        .map(|failure| format!(": {}", failure.message))
        .unwrap_or_default()
}

impl ApiError {
    /// Maps a failed status tag and its optional body to an error.
    pub fn from_status(status: ResponseStatus, error: Option<ErrorBody>) -> Self {
        match status {
            ResponseStatus::NotAuthenticated => ApiError::NotAuthenticated,
            ResponseStatus::InvalidState => ApiError::InvalidState,
            ResponseStatus::InsufficientBalance => ApiError::InsufficientBalance,
            ResponseStatus::ItemNotFound => ApiError::ItemNotFound,
            ResponseStatus::InvalidInput => ApiError::InvalidInput {
                failures: error.map(|e| e.body).unwrap_or_default(),
            },
            ResponseStatus::InvalidCredentials => ApiError::InvalidCredentials,
            ResponseStatus::ServerNameAlreadyInUse => ApiError::ServerNameAlreadyInUse,
            ResponseStatus::InternalError => ApiError::InternalError,
            ResponseStatus::ServerAccountLimit => ApiError::ServerAccountLimit,
            ResponseStatus::NoPermission => ApiError::NoPermission,
            ResponseStatus::EndpointNotFound => ApiError::EndpointNotFound,
            ResponseStatus::Ok => ApiError::Unknown("OK".to_string()),
            ResponseStatus::Unknown(tag) => ApiError::Unknown(tag),
        }
    }

    /// The status tag this error was derived from.
    pub fn status(&self) -> ResponseStatus {
        match self {
            ApiError::NotAuthenticated => ResponseStatus::NotAuthenticated,
            ApiError::InvalidState => ResponseStatus::InvalidState,
            ApiError::InsufficientBalance => ResponseStatus::InsufficientBalance,
            ApiError::ItemNotFound => ResponseStatus::ItemNotFound,
            ApiError::InvalidInput { .. } => ResponseStatus::InvalidInput,
            ApiError::InvalidCredentials => ResponseStatus::InvalidCredentials,
            ApiError::ServerNameAlreadyInUse => ResponseStatus::ServerNameAlreadyInUse,
            ApiError::InternalError => ResponseStatus::InternalError,
            ApiError::ServerAccountLimit => ResponseStatus::ServerAccountLimit,
            ApiError::NoPermission => ResponseStatus::NoPermission,
            ApiError::EndpointNotFound => ResponseStatus::EndpointNotFound,
            ApiError::Unknown(tag) => ResponseStatus::from(tag.clone()),
        }
    }
}
