use serde::{Deserialize, Serialize};

use super::item::ItemType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: String,
    pub name: String,
}

/// Browsing category with its sub-categories, scoped to products or services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub item_type: ItemType,
    pub sub_categories: Vec<SubCategory>,
}
