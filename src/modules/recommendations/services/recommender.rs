use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Generative-AI recommendation collaborator.
///
/// Black box from the storefront's perspective: past orders and vehicle
/// information go in as text, product suggestions come back. Failures are
/// surfaced to the caller and never touch order state.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, past_orders: &str, vehicle_information: &str)
        -> Result<Vec<String>>;
}

/// HTTP client for the hosted prompt-execution flow
pub struct PromptFlowClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl PromptFlowClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl Recommender for PromptFlowClient {
    async fn recommend(
        &self,
        past_orders: &str,
        vehicle_information: &str,
    ) -> Result<Vec<String>> {
        let url = format!("{}/flows/product-recommendations", self.base_url);

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct FlowRequest<'a> {
            past_orders: &'a str,
            vehicle_information: &'a str,
        }

        #[derive(Deserialize)]
        struct FlowResponse {
            recommendations: Vec<String>,
        }

        let mut request = self.client.post(&url).json(&FlowRequest {
            past_orders,
            vehicle_information,
        });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            AppError::recommendation_unavailable(format!("flow request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::recommendation_unavailable(format!(
                "flow returned {}: {}",
                status, body
            )));
        }

        let flow_response: FlowResponse = response.json().await.map_err(|e| {
            AppError::recommendation_unavailable(format!("invalid flow response: {}", e))
        })?;

        Ok(flow_response.recommendations)
    }
}
