//! Scheme-qualified location resolution for registry-managed repositories.
//!
//! A location such as `geoserver://roads` names a repository held by an
//! external registry. Resolution validates the scheme, extracts the name,
//! looks the name up in the registry and opens the repository by its
//! identifier. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Resolvers and dispatch in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
