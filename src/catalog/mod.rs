//! Static data store
//!
//! Loads the read-only portfolio documents once at startup and keeps them
//! as typed records. Shape errors and duplicate identifiers fail the load,
//! so a running server never holds a malformed catalog.

use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::assets::DataAssets;
use crate::errors::{DataError, DataResult};
use crate::models::{Identified, Project, ProfileDocument, QuoteBook, Skill, Talk};

pub const PROFILE_FILE: &str = "profile.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const TALKS_FILE: &str = "talks.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const QUOTES_FILE: &str = "quotes.json";

#[derive(Debug, Clone)]
pub struct StaticDataStore {
    profile: ProfileDocument,
    skills: Vec<Skill>,
    talks: Vec<Talk>,
    projects: Vec<Project>,
    quotes: QuoteBook,
}

impl StaticDataStore {
    /// Load every document from `data_dir`, falling back to the embedded defaults per file
    pub async fn load(data_dir: &Path) -> DataResult<Self> {
        let profile = load_document(data_dir, PROFILE_FILE).await?;
        let skills: Vec<Skill> = load_document(data_dir, SKILLS_FILE).await?;
        let talks: Vec<Talk> = load_document(data_dir, TALKS_FILE).await?;
        let projects: Vec<Project> = load_document(data_dir, PROJECTS_FILE).await?;
        let quotes = load_document(data_dir, QUOTES_FILE).await?;

        let store = Self::from_parts(profile, skills, talks, projects, quotes)?;
        info!(
            skills = store.skills.len(),
            talks = store.talks.len(),
            projects = store.projects.len(),
            quote_topics = store.quotes.len(),
            "Static data loaded"
        );
        Ok(store)
    }

    /// Build a store from already-parsed collections, enforcing id uniqueness
    pub fn from_parts(
        profile: ProfileDocument,
        skills: Vec<Skill>,
        talks: Vec<Talk>,
        projects: Vec<Project>,
        quotes: QuoteBook,
    ) -> DataResult<Self> {
        ensure_unique_ids(SKILLS_FILE, &skills)?;
        ensure_unique_ids(TALKS_FILE, &talks)?;
        ensure_unique_ids(PROJECTS_FILE, &projects)?;

        Ok(Self {
            profile,
            skills,
            talks,
            projects,
            quotes,
        })
    }

    pub fn profile(&self) -> &ProfileDocument {
        &self.profile
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn talks(&self) -> &[Talk] {
        &self.talks
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn quotes(&self) -> &QuoteBook {
        &self.quotes
    }

    pub fn talk(&self, id: &str) -> Option<&Talk> {
        self.talks.iter().find(|t| t.id == id)
    }
}

async fn load_document<T: DeserializeOwned>(data_dir: &Path, file: &str) -> DataResult<T> {
    let path: PathBuf = data_dir.join(file);

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => {
            debug!("Loading {} from {}", file, path.display());
            bytes
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("{} not found in data dir, using embedded copy", file);
            DataAssets::get_document(file)
                .ok_or_else(|| DataError::Missing {
                    file: file.to_string(),
                })?
                .data
                .into_owned()
        }
        Err(source) => {
            return Err(DataError::Read {
                file: path.display().to_string(),
                source,
            })
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| DataError::Parse {
        file: file.to_string(),
        source,
    })
}

fn ensure_unique_ids<T: Identified>(file: &str, items: &[T]) -> DataResult<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            return Err(DataError::DuplicateId {
                file: file.to_string(),
                id: item.id().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_dir_uses_embedded_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = StaticDataStore::load(dir.path()).await.unwrap();

        assert!(!store.talks().is_empty());
        assert!(!store.skills().is_empty());
        assert!(store.quotes().contains_key("general"));
        assert!(store.profile().modes.contains_key("default"));
    }

    #[tokio::test]
    async fn test_data_dir_overrides_single_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(TALKS_FILE),
            r#"[{"id":"t1","title":"One","description":"d","year":2025,"topics":[]}]"#,
        )
        .unwrap();

        let store = StaticDataStore::load(dir.path()).await.unwrap();
        assert_eq!(store.talks().len(), 1);
        assert!(store.talk("t1").is_some());
        assert!(store.talk("T1").is_none());
        // other documents still come from the embedded set
        assert!(!store.projects().is_empty());
    }

    #[tokio::test]
    async fn test_schema_mismatch_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SKILLS_FILE), r#"[{"id":"s1"}]"#).unwrap();

        let err = StaticDataStore::load(dir.path()).await.unwrap_err();
        assert!(matches!(err, DataError::Parse { ref file, .. } if file == SKILLS_FILE));
    }

    #[tokio::test]
    async fn test_duplicate_talk_ids_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(TALKS_FILE),
            r#"[
                {"id":"t1","title":"One","description":"d","year":2025,"topics":[]},
                {"id":"t1","title":"Two","description":"d","year":2026,"topics":[]}
            ]"#,
        )
        .unwrap();

        let err = StaticDataStore::load(dir.path()).await.unwrap_err();
        assert!(matches!(err, DataError::DuplicateId { ref id, .. } if id == "t1"));
    }
}
