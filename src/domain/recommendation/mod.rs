pub mod model;
pub mod service;

pub use model::{CareerPath, Recommendation};
pub use service::RecommendationService;
