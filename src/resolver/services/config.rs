//! Configuration for the registry-backed resolver.

use crate::resolver::domain::Scheme;
use serde::Deserialize;

/// Settings for [`super::ManagedRepositoryResolver`].
///
/// Loading is left to the host application; the struct deserializes from
/// any serde format so it can sit inside a larger configuration document.
///
/// # Examples
///
/// ```
/// use repolocator::resolver::services::ManagedResolverConfig;
///
/// let config = ManagedResolverConfig::default();
/// assert_eq!(config.scheme.as_str(), "geoserver");
/// assert!(config.warn_on_transient_failures);
///
/// let quiet = ManagedResolverConfig::quiet();
/// assert!(!quiet.warn_on_transient_failures);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManagedResolverConfig {
    /// Scheme token the resolver owns.
    pub scheme: Scheme,
    /// Whether existence probes log registry faults at warn level.
    ///
    /// When disabled, faults are logged at debug level like a plain
    /// not-found.
    pub warn_on_transient_failures: bool,
}

impl Default for ManagedResolverConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::geoserver(),
            warn_on_transient_failures: true,
        }
    }
}

impl ManagedResolverConfig {
    /// Creates a configuration owning a different scheme.
    #[must_use]
    pub fn with_scheme(scheme: Scheme) -> Self {
        Self {
            scheme,
            ..Default::default()
        }
    }

    /// Creates a configuration that keeps existence-probe faults at debug
    /// level.
    ///
    /// Useful for hosts that poll existence frequently.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            warn_on_transient_failures: false,
            ..Default::default()
        }
    }
}
