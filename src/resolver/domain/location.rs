//! Scheme-qualified repository locations.
//!
//! A location has the wire form `<scheme>://<payload>`. Everything after the
//! fixed `scheme://` prefix is taken verbatim as the repository name or id:
//! there is no percent-decoding and no query or fragment handling.

use super::{RepositoryName, ResolverDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scheme token owned by the registry-backed resolver.
pub const GEOSERVER_SCHEME: &str = "geoserver";

/// Separator between the scheme and the payload.
pub const SCHEME_SEPARATOR: &str = "://";

/// Validated URI scheme token.
///
/// Comparison is case-sensitive; the token is stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Scheme(String);

impl Scheme {
    /// Creates a validated scheme.
    ///
    /// The token must start with an ASCII letter followed by letters,
    /// digits, `+`, `-` or `.`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverDomainError::InvalidScheme`] when the token is not a
    /// valid scheme.
    pub fn new(value: impl Into<String>) -> Result<Self, ResolverDomainError> {
        let token = value.into();
        if !is_scheme_token(&token) {
            return Err(ResolverDomainError::InvalidScheme(token));
        }
        Ok(Self(token))
    }

    /// Returns the scheme owned by the registry-backed resolver.
    #[must_use]
    pub fn geoserver() -> Self {
        Self(GEOSERVER_SCHEME.to_owned())
    }

    /// Returns the scheme as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the offset of the payload within a location of this scheme.
    #[must_use]
    pub fn prefix_len(&self) -> usize {
        self.0.len() + SCHEME_SEPARATOR.len()
    }

    /// Returns whether `location` carries exactly this scheme.
    ///
    /// Empty and malformed input yields `false`.
    #[must_use]
    pub fn owns(&self, location: &str) -> bool {
        scheme_component(location) == Some(self.as_str())
    }

    /// Extracts the name-or-id payload from a location of this scheme.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverDomainError::SchemeMismatch`] when the location does
    /// not carry this scheme, [`ResolverDomainError::MissingSeparator`] when
    /// `://` does not follow the scheme, and
    /// [`ResolverDomainError::EmptyPayload`] when nothing but whitespace
    /// follows the prefix.
    pub fn payload_of<'a>(&self, location: &'a str) -> Result<&'a str, ResolverDomainError> {
        if !self.owns(location) {
            return Err(ResolverDomainError::SchemeMismatch {
                expected: self.clone(),
                location: location.to_owned(),
            });
        }

        let payload = location
            .strip_prefix(self.as_str())
            .and_then(|rest| rest.strip_prefix(SCHEME_SEPARATOR))
            .ok_or_else(|| ResolverDomainError::MissingSeparator(location.to_owned()))?;

        if payload.trim().is_empty() {
            return Err(ResolverDomainError::EmptyPayload(location.to_owned()));
        }
        Ok(payload)
    }

    /// Formats the canonical location for `payload`.
    ///
    /// Plain concatenation; the payload is not validated.
    #[must_use]
    pub fn uri_for(&self, payload: &str) -> String {
        format!("{}{SCHEME_SEPARATOR}{payload}", self.0)
    }
}

impl AsRef<str> for Scheme {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<String> for Scheme {
    type Error = ResolverDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Scheme> for String {
    fn from(value: Scheme) -> Self {
        value.0
    }
}

/// Parsed `<scheme>://<payload>` repository location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationUri {
    scheme: Scheme,
    name: RepositoryName,
}

impl LocationUri {
    /// Parses a location of any valid scheme.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverDomainError::InvalidScheme`] when no valid scheme
    /// precedes the first `:`, and the errors of [`Scheme::payload_of`]
    /// otherwise.
    pub fn parse(location: &str) -> Result<Self, ResolverDomainError> {
        let token = scheme_component(location)
            .ok_or_else(|| ResolverDomainError::InvalidScheme(location.to_owned()))?;
        let scheme = Scheme::new(token)?;
        let name = RepositoryName::new(scheme.payload_of(location)?)?;
        Ok(Self { scheme, name })
    }

    /// Builds the location of a named repository under `scheme`.
    #[must_use]
    pub const fn for_repository(scheme: Scheme, name: RepositoryName) -> Self {
        Self { scheme, name }
    }

    /// Returns the location scheme.
    #[must_use]
    pub const fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Returns the name-or-id payload.
    #[must_use]
    pub const fn name(&self) -> &RepositoryName {
        &self.name
    }
}

impl fmt::Display for LocationUri {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}{SCHEME_SEPARATOR}{}", self.scheme, self.name)
    }
}

impl FromStr for LocationUri {
    type Err = ResolverDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for LocationUri {
    type Error = ResolverDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LocationUri> for String {
    fn from(value: LocationUri) -> Self {
        value.to_string()
    }
}

/// Returns the scheme component of `location`, if it has a valid one.
fn scheme_component(location: &str) -> Option<&str> {
    let (candidate, _) = location.split_once(':')?;
    is_scheme_token(candidate).then_some(candidate)
}

fn is_scheme_token(token: &str) -> bool {
    let mut characters = token.chars();
    characters
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic())
        && characters.all(|character| {
            character.is_ascii_alphanumeric() || matches!(character, '+' | '-' | '.')
        })
}
