use serde::{Deserialize, Serialize};

/// Request payload for the product create and update endpoints.
///
/// All fields are optional on the wire so the same payload type serves both
/// operations: create requires every field and rejects the request otherwise,
/// update applies only the fields that are present.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
