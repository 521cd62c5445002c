use minefort_core::session::SESSION_COOKIE;
use minefort_core::ApiError;

/// Everything a client call can fail with.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API answered with a non-OK status tag.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Transport failure, or a reply body that was not the expected JSON.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("login succeeded but the reply carried no {SESSION_COOKIE} cookie")]
    MissingSessionCookie,

    /// The stored session holds bytes that cannot go into a `Cookie` header.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
    /// The API error behind this failure, if the server produced one.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
