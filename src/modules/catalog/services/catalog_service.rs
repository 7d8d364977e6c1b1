use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::catalog::data;
use crate::modules::catalog::models::{CatalogItem, SelectedVehicle, Store};

/// Sort orders offered by the browse views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    PriceAsc,
    PriceDesc,
    ReviewsDesc,
}

/// Filter set applied to the product and service listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFilter {
    pub search: Option<String>,
    pub main_category: Option<String>,
    pub sub_category: Option<String>,
    pub wilaya: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<u16>,
    pub engine: Option<String>,
    pub sort: Option<SortOption>,
}

impl CatalogFilter {
    fn vehicle(&self) -> SelectedVehicle {
        SelectedVehicle {
            brand: self.brand.clone(),
            model: self.model.clone(),
            year: self.year,
            engine: self.engine.clone(),
        }
    }
}

/// Filter set applied to the store listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreFilter {
    pub search: Option<String>,
    pub wilaya: Option<String>,
    pub min_rating: Option<f32>,
    pub sort: Option<SortOption>,
}

/// Predicate-chain filtering and sorting over the static catalog
pub struct CatalogService;

impl CatalogService {
    pub fn products(filter: &CatalogFilter) -> Vec<CatalogItem> {
        Self::apply(data::products(), filter)
    }

    pub fn services(filter: &CatalogFilter) -> Vec<CatalogItem> {
        Self::apply(data::services(), filter)
    }

    fn apply(items: &[CatalogItem], filter: &CatalogFilter) -> Vec<CatalogItem> {
        let vehicle = filter.vehicle();
        let search = filter.search.as_deref().map(str::to_lowercase);

        let mut matched: Vec<CatalogItem> = items
            .iter()
            .filter(|item| {
                let search_match = match &search {
                    Some(term) => {
                        item.name.to_lowercase().contains(term)
                            || item.store.to_lowercase().contains(term)
                            || item.main_category.to_lowercase().contains(term)
                            || item.sub_category.to_lowercase().contains(term)
                            || item.location.to_lowercase().contains(term)
                    }
                    None => true,
                };
                let category_match = filter
                    .main_category
                    .as_ref()
                    .map_or(true, |c| &item.main_category == c);
                let sub_category_match = filter
                    .sub_category
                    .as_ref()
                    .map_or(true, |c| &item.sub_category == c);
                let wilaya_match = filter.wilaya.as_ref().map_or(true, |w| &item.wilaya == w);
                let min_match = filter.min_price.map_or(true, |min| item.price >= min);
                let max_match = filter.max_price.map_or(true, |max| item.price <= max);
                let vehicle_match = vehicle.matches(&item.compatible_vehicles);

                search_match
                    && category_match
                    && sub_category_match
                    && wilaya_match
                    && min_match
                    && max_match
                    && vehicle_match
            })
            .cloned()
            .collect();

        match filter.sort {
            Some(SortOption::PriceAsc) => matched.sort_by(|a, b| a.price.cmp(&b.price)),
            Some(SortOption::PriceDesc) => matched.sort_by(|a, b| b.price.cmp(&a.price)),
            Some(SortOption::ReviewsDesc) => {
                matched.sort_by(|a, b| b.reviews.total_cmp(&a.reviews))
            }
            None => {}
        }

        matched
    }

    pub fn stores(filter: &StoreFilter) -> Vec<Store> {
        let search = filter.search.as_deref().map(str::to_lowercase);

        let mut matched: Vec<Store> = data::stores()
            .iter()
            .filter(|store| {
                let search_match = match &search {
                    Some(term) => {
                        store.name.to_lowercase().contains(term)
                            || store.location.to_lowercase().contains(term)
                            || store.store_type.to_lowercase().contains(term)
                    }
                    None => true,
                };
                let wilaya_match = filter.wilaya.as_ref().map_or(true, |w| &store.wilaya == w);
                let rating_match = filter.min_rating.map_or(true, |min| store.rating >= min);

                search_match && wilaya_match && rating_match
            })
            .cloned()
            .collect();

        if let Some(SortOption::ReviewsDesc) = filter.sort {
            matched.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }

        matched
    }

    pub fn store_by_id(id: &str) -> Option<Store> {
        data::find_store(id).cloned()
    }
}
