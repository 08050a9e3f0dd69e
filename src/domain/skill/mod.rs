pub mod model;
pub mod service;

pub use model::{AddSkillRequest, Skill, UserSkill};
pub use service::SkillService;
