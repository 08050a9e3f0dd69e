use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A skill known to the platform's catalog
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
}

/// A skill the user tracks, with their self-assessed level (0-100)
#[derive(Debug, Clone, Deserialize)]
pub struct UserSkill {
    pub id: i64,
    pub skill: Skill,
    pub level: u32,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for POST /skills/my/
#[derive(Debug, Serialize)]
pub struct AddSkillRequest {
    pub skill_id: i64,
    pub level: u32,
}
