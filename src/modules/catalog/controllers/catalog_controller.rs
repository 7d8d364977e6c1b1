// HTTP handlers for catalog browsing
//
// Endpoints:
// - GET /api/catalog/products - Filtered, sorted product listing
// - GET /api/catalog/services - Filtered, sorted service listing
// - GET /api/catalog/stores - Filtered store listing
// - GET /api/catalog/stores/{store_id} - Single store
// - GET /api/catalog/categories - Browsing categories

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::core::{AppError, Result};
use crate::modules::catalog::data;
use crate::modules::catalog::models::{CatalogItem, Category, Store};
use crate::modules::catalog::services::{CatalogFilter, CatalogService, StoreFilter};

#[derive(Debug, Serialize)]
pub struct ItemListResponse {
    pub count: usize,
    pub items: Vec<CatalogItem>,
}

#[derive(Debug, Serialize)]
pub struct StoreListResponse {
    pub count: usize,
    pub stores: Vec<Store>,
    pub wilayas: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// GET /api/catalog/products
pub async fn list_products(filter: web::Query<CatalogFilter>) -> Result<HttpResponse> {
    let items = CatalogService::products(&filter);
    Ok(HttpResponse::Ok().json(ItemListResponse {
        count: items.len(),
        items,
    }))
}

/// GET /api/catalog/services
pub async fn list_services(filter: web::Query<CatalogFilter>) -> Result<HttpResponse> {
    let items = CatalogService::services(&filter);
    Ok(HttpResponse::Ok().json(ItemListResponse {
        count: items.len(),
        items,
    }))
}

/// GET /api/catalog/stores
pub async fn list_stores(filter: web::Query<StoreFilter>) -> Result<HttpResponse> {
    let stores = CatalogService::stores(&filter);
    Ok(HttpResponse::Ok().json(StoreListResponse {
        count: stores.len(),
        stores,
        wilayas: data::wilayas(),
    }))
}

/// GET /api/catalog/stores/{store_id}
pub async fn get_store(store_id: web::Path<String>) -> Result<HttpResponse> {
    let store = CatalogService::store_by_id(&store_id)
        .ok_or_else(|| AppError::not_found(format!("store {}", store_id)))?;
    Ok(HttpResponse::Ok().json(store))
}

/// GET /api/catalog/categories
pub async fn list_categories() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(CategoriesResponse {
        categories: data::categories().to_vec(),
    }))
}

/// Configure catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/catalog")
            .route("/products", web::get().to(list_products))
            .route("/services", web::get().to(list_services))
            .route("/stores", web::get().to(list_stores))
            .route("/stores/{store_id}", web::get().to(get_store))
            .route("/categories", web::get().to(list_categories)),
    );
}
