use serde::{Deserialize, Serialize};

/// A physical store that sells parts or performs services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub location: String,
    pub wilaya: String,
    #[serde(rename = "type")]
    pub store_type: String,
    pub address: String,
    pub rating: f32,
}
