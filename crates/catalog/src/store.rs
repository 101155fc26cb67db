//! Store information metadata.

use serde::{Deserialize, Serialize};

/// Static display metadata for the storefront header.
///
/// Opaque to the ordering engine; carried alongside the catalog so the
/// rendering shell has one place to read it from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    pub description: String,
    pub website: String,
    pub phone: String,
    pub address: String,
    pub weekday_hours: String,
    pub weekend_hours: String,
}
