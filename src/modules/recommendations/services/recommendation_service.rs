use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use crate::core::{AppError, Currency, Result};
use crate::modules::orders::models::Order;
use crate::modules::orders::services::OrderService;

use super::recommender::Recommender;

/// Bridges order history into the recommendation collaborator.
///
/// Reads are isolated from the payment core: a collaborator failure surfaces
/// as an error response with a retry affordance and leaves orders untouched.
pub struct RecommendationService {
    recommender: Arc<dyn Recommender>,
    orders: Arc<OrderService>,
}

impl RecommendationService {
    pub fn new(recommender: Arc<dyn Recommender>, orders: Arc<OrderService>) -> Self {
        Self {
            recommender,
            orders,
        }
    }

    /// Recommend products for a buyer's vehicle based on their order history.
    pub async fn recommend(
        &self,
        buyer_id: &str,
        vehicle_information: &str,
        today: NaiveDate,
    ) -> Result<Vec<String>> {
        if vehicle_information.trim().len() < 5 {
            return Err(AppError::validation(
                "vehicle information must describe make, model, and year",
            ));
        }

        let orders = self.orders.list_orders(today).await?;
        let past_orders = Self::render_past_orders(&orders, buyer_id);

        let recommendations = self
            .recommender
            .recommend(&past_orders, vehicle_information)
            .await?;

        info!(
            buyer_id,
            count = recommendations.len(),
            "Recommendations fetched"
        );

        Ok(recommendations)
    }

    /// Comma-separated order summary the flow prompt expects
    fn render_past_orders(orders: &[Order], buyer_id: &str) -> String {
        let items: Vec<String> = orders
            .iter()
            .filter(|o| o.buyer_id == buyer_id)
            .map(|o| format!("{} ({})", o.item_name, Currency::DZD.format_amount(o.item_price)))
            .collect();

        if items.is_empty() {
            "No past orders".to_string()
        } else {
            items.join(", ")
        }
    }
}
