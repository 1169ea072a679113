//! Skill resource
//!
//! Skills are the flat catalog that vacancies reference through their
//! skill requirements.

mod actions;
mod reducer;
mod service;
mod state;

pub use actions::SkillAction;
pub use reducer::{SkillEnvironment, SkillReducer};
pub use service::SkillService;
pub use state::{NewSkill, Skill, SkillId, SkillState};
