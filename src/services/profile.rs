use std::sync::Arc;

use crate::catalog::StaticDataStore;
use crate::models::{Profile, Quote};

use super::query;

/// Mode whose extras are merged into `GET /profile`
pub const DEFAULT_PROFILE_MODE: &str = "default";

#[derive(Debug, Clone)]
pub struct ProfileService {
    store: Arc<StaticDataStore>,
}

impl ProfileService {
    pub fn new(store: Arc<StaticDataStore>) -> Self {
        Self { store }
    }

    pub fn get_profile(&self) -> Profile {
        self.store.profile().with_mode(DEFAULT_PROFILE_MODE)
    }

    pub fn get_quote(&self, topic: Option<&str>) -> Quote {
        query::quote_for_topic(self.store.quotes(), topic)
    }
}
