use std::sync::Arc;

use crate::catalog::StaticDataStore;
use crate::models::Project;

#[derive(Debug, Clone)]
pub struct ProjectsService {
    store: Arc<StaticDataStore>,
}

impl ProjectsService {
    pub fn new(store: Arc<StaticDataStore>) -> Self {
        Self { store }
    }

    pub fn get_projects(&self) -> Vec<Project> {
        self.store.projects().to_vec()
    }
}
