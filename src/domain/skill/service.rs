use crate::error::ClientResult;
use crate::infrastructure::http::ApiClient;

use super::{AddSkillRequest, Skill, UserSkill};

const SKILLS_PATH: &str = "/skills/";
const MY_SKILLS_PATH: &str = "/skills/my/";

pub struct SkillService {
    client: ApiClient,
}

impl SkillService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Full skill catalog
    pub async fn list_skills(&self) -> ClientResult<Vec<Skill>> {
        self.client.get_json(SKILLS_PATH).await
    }

    /// The caller's tracked skills
    pub async fn my_skills(&self) -> ClientResult<Vec<UserSkill>> {
        self.client.get_json(MY_SKILLS_PATH).await
    }

    /// Track a skill at a level; the backend upserts per (user, skill).
    pub async fn add_skill(&self, skill_id: i64, level: u32) -> ClientResult<UserSkill> {
        let request = AddSkillRequest { skill_id, level };
        self.client.post_json(MY_SKILLS_PATH, &request).await
    }
}
