use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::vehicle::CompatibleVehicle;

/// Whether a catalog listing is a physical part or a workshop service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Product,
    Service,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Service => "service",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A purchasable listing: an automotive part or a workshop service.
///
/// Products and services share the same shape; the containing list decides
/// which one an item is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub store: String,
    pub location: String,
    pub wilaya: String,
    pub price: Decimal,
    pub description: String,
    pub main_category: String,
    pub sub_category: String,
    pub reviews: f32,
    pub store_address: String,
    /// Empty means universal fitment
    pub compatible_vehicles: Vec<CompatibleVehicle>,
}
