// HTTP handler for AI product recommendations
//
// Endpoint:
// - POST /api/recommendations - Recommendations for a vehicle, based on the
//   buyer's order history. Collaborator failures come back as 502 so the
//   client can offer a retry; they never affect stored orders.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::core::{clock, Result};
use crate::modules::orders::services::DEFAULT_BUYER_ID;
use crate::modules::recommendations::services::RecommendationService;

/// Request for POST /api/recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    /// Free text: make, model, and year
    pub vehicle_information: String,
    pub buyer_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<String>,
}

/// POST /api/recommendations
pub async fn recommend(
    request: web::Json<RecommendationRequest>,
    service: web::Data<RecommendationService>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let buyer_id = request
        .buyer_id
        .unwrap_or_else(|| DEFAULT_BUYER_ID.to_string());

    let recommendations = service
        .recommend(&buyer_id, &request.vehicle_information, clock::today_utc())
        .await?;

    Ok(HttpResponse::Ok().json(RecommendationResponse { recommendations }))
}

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/recommendations").route("", web::post().to(recommend)));
}
