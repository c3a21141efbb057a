//! Authentication primitives: presented credentials, stored credentials,
//! authorities and the authenticated principal.
//!
//! Inbound adapters decode transport headers into [`BasicCredentials`]; the
//! authenticator answers with a [`Principal`] that handlers consult before
//! privileged operations.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use tracing::warn;
use zeroize::Zeroizing;

use super::Error;

/// Domain error returned when presented credentials are malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was empty.
    EmptyPassword,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

/// Username and password presented with a request.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty and keeps caller whitespace. It is wiped from
///   memory on drop.
///
/// # Examples
/// ```
/// use anime_backend::domain::BasicCredentials;
///
/// let creds = BasicCredentials::try_from_parts(" ricardo ", "academy").unwrap();
/// assert_eq!(creds.username(), "ricardo");
/// assert_eq!(creds.password(), "academy");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl BasicCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(
        username: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(CredentialsValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A role granted to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Authority {
    /// May read and write the catalogue.
    User,
    /// May additionally use administrative routes.
    Admin,
}

impl Authority {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "ROLE_USER",
            Self::Admin => "ROLE_ADMIN",
        }
    }

    /// Parse a comma-separated authority list such as
    /// `"ROLE_USER,ROLE_ADMIN"`. Unknown entries are logged and skipped.
    ///
    /// # Examples
    /// ```
    /// use anime_backend::domain::Authority;
    ///
    /// let set = Authority::parse_list("ROLE_USER, ROLE_ADMIN");
    /// assert!(set.contains(&Authority::Admin));
    /// ```
    pub fn parse_list(raw: &str) -> BTreeSet<Self> {
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .filter_map(|entry| match entry.parse() {
                Ok(authority) => Some(authority),
                Err(()) => {
                    warn!(authority = entry, "ignoring unknown authority");
                    None
                }
            })
            .collect()
    }

    /// Render a set back into its comma-separated storage form.
    pub fn join(authorities: &BTreeSet<Self>) -> String {
        authorities
            .iter()
            .map(|authority| authority.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for Authority {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ROLE_USER" => Ok(Self::User),
            "ROLE_ADMIN" => Ok(Self::Admin),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored account able to authenticate.
///
/// `password_hash` is an Argon2 PHC string; plaintext never reaches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub authorities: BTreeSet<Authority>,
}

/// The caller a request was authenticated as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    username: String,
    authorities: BTreeSet<Authority>,
}

impl Principal {
    pub fn new(username: impl Into<String>, authorities: BTreeSet<Authority>) -> Self {
        Self {
            username: username.into(),
            authorities,
        }
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    pub fn authorities(&self) -> &BTreeSet<Authority> {
        &self.authorities
    }

    pub fn has(&self, authority: Authority) -> bool {
        self.authorities.contains(&authority)
    }

    /// Fail with [`crate::domain::ErrorCode::Forbidden`] unless the
    /// principal holds `authority`.
    pub fn require(&self, authority: Authority) -> Result<(), Error> {
        if self.has(authority) {
            Ok(())
        } else {
            Err(Error::forbidden(format!("{authority} is required")))
        }
    }
}
