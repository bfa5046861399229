//! Repolocator: scheme-qualified location resolver for managed repositories.
//!
//! This crate turns locations such as `geoserver://roads` into live handles
//! on repositories owned by an external registry. The registry is injected
//! through a port; this crate never creates, stores or deletes repositories.
//!
//! # Architecture
//!
//! Repolocator follows hexagonal architecture principles:
//!
//! - **Domain**: Locations, names, identifiers and capability sets
//! - **Ports**: Registry, handle and resolver trait contracts
//! - **Adapters**: An in-memory registry for tests and local composition
//! - **Services**: The registry-backed resolver and scheme dispatch
//!
//! # Modules
//!
//! - [`resolver`]: Location parsing, resolution and resolver dispatch

pub mod resolver;
