//! Admin credential pair and constant-time comparison.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// The single admin username/password pair, loaded from configuration.
#[derive(Clone)]
pub struct AdminCredentials {
    username: Zeroizing<String>,
    password: Zeroizing<String>,
}

impl AdminCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Zeroizing::new(username.into()),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Compare a supplied pair against the configured one.
    ///
    /// Both halves are always compared so the time taken does not reveal
    /// which of them was wrong.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let username_ok = digests_equal(self.username.as_bytes(), username.as_bytes());
        let password_ok = digests_equal(self.password.as_bytes(), password.as_bytes());

        username_ok & password_ok
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username.as_str())
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Hash both sides to a fixed width, then fold every byte difference so the
/// comparison never exits early.
fn digests_equal(expected: &[u8], supplied: &[u8]) -> bool {
    let expected = Sha256::digest(expected);
    let supplied = Sha256::digest(supplied);

    expected
        .iter()
        .zip(supplied.iter())
        .fold(0_u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}
