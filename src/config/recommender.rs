use std::env;

/// Recommendation collaborator endpoint
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    pub base_url: String,
    /// Bearer token for the hosted flow; unset in local development
    pub api_key: Option<String>,
}

impl RecommenderConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("RECOMMENDER_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3400".to_string());
        let api_key = env::var("RECOMMENDER_API_KEY").ok();

        Self { base_url, api_key }
    }
}
