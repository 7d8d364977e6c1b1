pub mod recommendation_service;
pub mod recommender;

pub use recommendation_service::RecommendationService;
pub use recommender::{PromptFlowClient, Recommender};
