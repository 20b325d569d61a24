use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single product record as persisted by the backend and displayed by the
/// frontend.
///
/// The `id` is an opaque string assigned by the data store when the record is
/// created; it never changes and is never reused. Both timestamps are set by
/// the server and may be absent on the wire (a client never sends them).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
