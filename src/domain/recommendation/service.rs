use crate::error::ClientResult;
use crate::infrastructure::http::ApiClient;

use super::Recommendation;

const RECOMMENDATIONS_PATH: &str = "/recommendations/";

pub struct RecommendationService {
    client: ApiClient,
}

impl RecommendationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Recommendation>> {
        self.client.get_json(RECOMMENDATIONS_PATH).await
    }
}
