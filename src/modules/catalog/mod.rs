pub mod controllers;
pub mod data;
pub mod models;
pub mod services;

pub use models::{CatalogItem, ItemType, SelectedVehicle, Store};
pub use services::{CatalogFilter, CatalogService};
