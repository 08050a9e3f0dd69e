use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CareerPath {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A scored career suggestion computed by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct Recommendation {
    pub career_path: CareerPath,
    pub score: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
