//! Bazaar event read model.

use crate::ids::EventId;
use serde::{Deserialize, Serialize};

/// A bazaar event served by `GET /api/events`. Fetch-only; dates are
/// carried as the backend's strings and not interpreted here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Event identifier.
    pub id: EventId,
    /// Event name.
    #[serde(rename = "nama")]
    pub name: String,
    /// Description text.
    #[serde(rename = "deskripsi", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Event date.
    #[serde(rename = "tanggal")]
    pub date: String,
    /// Registration deadline.
    #[serde(
        rename = "tanggal_pendaftaran",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_deadline: Option<String>,
    /// Participant quota.
    #[serde(rename = "kuota", default)]
    pub quota: i64,
}
