use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod question;

pub use question::{QuestionRecord, QuestionStatus, SubmitQuestionRequest, SubmitQuestionResponse};

/// A record that carries a stable identifier within its collection
pub trait Identified {
    fn id(&self) -> &str;
}

/// Profile document as stored in `profile.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDocument {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub location: String,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub methods: Vec<String>,
    /// Per-mode extras; the `default` entry is merged into the served profile
    #[serde(default)]
    pub modes: HashMap<String, ProfileMode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileMode {
    pub current_focus: Option<String>,
    pub favorite_tools: Option<Vec<String>>,
}

/// Profile as served by `GET /profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub location: String,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub methods: Vec<String>,
    pub current_focus: Option<String>,
    pub favorite_tools: Option<Vec<String>>,
}

impl ProfileDocument {
    /// Flatten the document with the given mode's extras
    pub fn with_mode(&self, mode: &str) -> Profile {
        let extras = self.modes.get(mode).cloned().unwrap_or_default();
        Profile {
            name: self.name.clone(),
            role: self.role.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
            website: self.website.clone(),
            linkedin: self.linkedin.clone(),
            methods: self.methods.clone(),
            current_focus: extras.current_focus,
            favorite_tools: extras.favorite_tools,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub topic: Option<String>,
    pub context: Option<String>,
}

/// Quotes grouped by topic, as stored in `quotes.json`
pub type QuoteBook = HashMap<String, Vec<Quote>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: String,
    pub domain: String,
    pub tags: Vec<String>,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talk {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub venue: Option<String>,
    pub topics: Vec<String>,
    pub slides_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub highlights: Vec<String>,
}

impl Identified for Skill {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Talk {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_merges_default_mode() {
        let doc: ProfileDocument = serde_json::from_value(json!({
            "name": "Luise Freese",
            "role": "Architect",
            "bio": "Builds things",
            "location": "Germany",
            "website": null,
            "linkedin": null,
            "methods": ["Design for longevity"],
            "modes": {
                "default": {"current_focus": "Governance", "favorite_tools": ["Bicep"]},
                "conference": {"current_focus": "Talks"}
            }
        }))
        .unwrap();

        let profile = doc.with_mode("default");
        assert_eq!(profile.current_focus.as_deref(), Some("Governance"));
        assert_eq!(profile.favorite_tools, Some(vec!["Bicep".to_string()]));

        let bare = doc.with_mode("afterhours");
        assert!(bare.current_focus.is_none());
    }

    #[test]
    fn test_talk_rejects_non_integer_year() {
        let result: Result<Talk, _> = serde_json::from_value(json!({
            "id": "t1",
            "title": "T",
            "description": "D",
            "year": "twenty",
            "topics": []
        }));
        assert!(result.is_err());
    }
}
