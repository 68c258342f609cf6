//! HTTP Basic credential parsing.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use salvo::{Request, http::header::AUTHORIZATION};
use zeroize::Zeroizing;

/// A username/password pair taken from an `Authorization: Basic` header.
pub(super) struct BasicCredentials {
    pub(super) username: String,
    pub(super) password: Zeroizing<String>,
}

/// Extract Basic credentials from the request, if well formed.
pub(super) fn extract_basic_credentials(req: &Request) -> Option<BasicCredentials> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;

    parse_basic(value)
}

fn parse_basic(header: &str) -> Option<BasicCredentials> {
    let (scheme, encoded) = header.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = Zeroizing::new(STANDARD.decode(encoded.trim()).ok()?);
    let decoded = std::str::from_utf8(&decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some(BasicCredentials {
        username: username.to_string(),
        password: Zeroizing::new(password.to_string()),
    })
}
