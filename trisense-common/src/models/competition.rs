//! Competition reference data

use serde::{Deserialize, Serialize};

/// A competition (event) scoping all uploads and mappings
///
/// Read-only reference data from the admin tooling's perspective: the
/// backend owns creation and editing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    /// Backend identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Event date (ISO 8601 date string as returned by the backend)
    pub date: Option<String>,
    /// Venue or city
    pub location: Option<String>,
}
