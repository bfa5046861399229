//! Adapter implementations for the registry port.

pub mod memory;
