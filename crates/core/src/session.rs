//! Session cookie parsing and formatting.

/// Name of the cookie carrying the session credential.
pub const SESSION_COOKIE: &str = "minefort-session";

/// Value for the `Cookie` request header: `minefort-session=<token>`.
///
/// An empty token still produces the prefix, which the API answers with
/// `NOT_AUTHENTICATED`.
pub fn cookie_header(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}")
}

/// Extract the session token from one `Set-Cookie` header value.
///
/// Only the first `; `-separated segment is considered (attributes such as
/// `Path` or `HttpOnly` follow it). Returns `None` for other cookies and for
/// an empty token.
pub fn parse_set_cookie(header: &str) -> Option<String> {
    let first = header.split(';').next()?.trim();
    let token = first.strip_prefix(SESSION_COOKIE)?.strip_prefix('=')?;

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// First session token found among several `Set-Cookie` header values.
pub fn find_session<'a>(headers: impl IntoIterator<Item = &'a str>) -> Option<String> {
    headers.into_iter().find_map(parse_set_cookie)
}
