//! Repository configuration snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key/value configuration attached to a repository or a repository root.
///
/// Serializes as a plain string map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryConfig(pub BTreeMap<String, String>);
