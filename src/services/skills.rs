use std::sync::Arc;

use crate::catalog::StaticDataStore;
use crate::models::Skill;

use super::query;

#[derive(Debug, Clone)]
pub struct SkillsService {
    store: Arc<StaticDataStore>,
}

impl SkillsService {
    pub fn new(store: Arc<StaticDataStore>) -> Self {
        Self { store }
    }

    /// Skills, optionally restricted to one domain (case-insensitive)
    pub fn get_skills(&self, domain: Option<&str>) -> Vec<Skill> {
        query::skills_by_domain(self.store.skills(), domain)
    }
}
