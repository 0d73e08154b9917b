//! Talks and the questions visitors ask about them

use std::sync::Arc;
use tracing::{error, info};

use crate::catalog::StaticDataStore;
use crate::errors::{AppError, AppResult};
use crate::models::{QuestionRecord, SubmitQuestionRequest, Talk};
use crate::repositories::QuestionRepository;

use super::query;

#[derive(Clone)]
pub struct TalksService {
    store: Arc<StaticDataStore>,
    questions: Arc<dyn QuestionRepository>,
}

impl TalksService {
    pub fn new(store: Arc<StaticDataStore>, questions: Arc<dyn QuestionRepository>) -> Self {
        Self { store, questions }
    }

    /// Talks, optionally restricted to one year
    pub fn get_talks(&self, year: Option<i32>) -> Vec<Talk> {
        query::talks_by_year(self.store.talks(), year)
    }

    /// Validate, check the talk exists, then append to the question log
    ///
    /// Nothing is written unless both checks pass. A failed write is
    /// returned to the caller rather than reported as success.
    pub async fn submit_question(
        &self,
        talk_id: &str,
        request: SubmitQuestionRequest,
    ) -> AppResult<QuestionRecord> {
        let input = request.validate().map_err(AppError::validation)?;

        if self.store.talk(talk_id).is_none() {
            return Err(AppError::not_found("talk", talk_id));
        }

        let record = QuestionRecord::new(talk_id, input);
        match self.questions.append(record.clone()).await {
            Ok(total) => {
                info!(
                    question_id = %record.id,
                    talk_id = %talk_id,
                    total_questions = total,
                    "Question received"
                );
                Ok(record)
            }
            Err(e) => {
                error!(
                    question_id = %record.id,
                    talk_id = %talk_id,
                    store = %self.questions.location(),
                    "Failed to persist question: {}",
                    e
                );
                Err(e.into())
            }
        }
    }

    /// Persisted questions, optionally for a single talk, in submission order
    pub async fn list_questions(&self, talk_id: Option<&str>) -> AppResult<Vec<QuestionRecord>> {
        let all = self.questions.find_all().await?;
        Ok(query::questions_by_talk(&all, talk_id))
    }

    pub fn question_store_location(&self) -> String {
        self.questions.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{RepositoryError, RepositoryResult};
    use crate::models::{ProfileDocument, QuestionStatus};
    use crate::repositories::JsonQuestionLog;
    use async_trait::async_trait;
    use std::collections::HashMap;

    fn talk(id: &str, year: i32) -> Talk {
        Talk {
            id: id.to_string(),
            title: format!("Talk {id}"),
            description: String::new(),
            year,
            venue: None,
            topics: vec![],
            slides_url: None,
        }
    }

    fn store() -> Arc<StaticDataStore> {
        let profile = ProfileDocument {
            name: "Test".to_string(),
            role: "Tester".to_string(),
            bio: String::new(),
            location: String::new(),
            website: None,
            linkedin: None,
            methods: vec![],
            modes: HashMap::new(),
        };
        Arc::new(
            StaticDataStore::from_parts(
                profile,
                vec![],
                vec![talk("t1", 2025), talk("t2", 2026)],
                vec![],
                HashMap::new(),
            )
            .unwrap(),
        )
    }

    fn request(question: &str) -> SubmitQuestionRequest {
        SubmitQuestionRequest {
            name: Some("A".to_string()),
            contact: Some("a@x.com".to_string()),
            question: Some(question.to_string()),
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl QuestionRepository for FailingRepository {
        async fn append(&self, _record: QuestionRecord) -> RepositoryResult<usize> {
            Err(RepositoryError::io(
                "/read-only/questions.json",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        }

        async fn find_all(&self) -> RepositoryResult<Vec<QuestionRecord>> {
            Ok(Vec::new())
        }

        fn location(&self) -> String {
            "/read-only/questions.json".to_string()
        }
    }

    #[tokio::test]
    async fn test_submit_appends_one_record() {
        let dir = tempfile::tempdir().unwrap();
        let service = TalksService::new(
            store(),
            Arc::new(JsonQuestionLog::new(dir.path().join("questions.json"))),
        );

        let record = service
            .submit_question("t1", request("Why does this matter for teams?"))
            .await
            .unwrap();
        assert_eq!(record.talk_id, "t1");
        assert_eq!(record.status, QuestionStatus::Received);
        assert_eq!(service.list_questions(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_talk_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let service = TalksService::new(
            store(),
            Arc::new(JsonQuestionLog::new(dir.path().join("questions.json"))),
        );

        let err = service
            .submit_question("nonexistent-talk", request("Why does this matter for teams?"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { ref id, .. } if id == "nonexistent-talk"));
        assert!(service.list_questions(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_short_question_rejected_before_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        let service = TalksService::new(store(), Arc::new(JsonQuestionLog::new(&path)));

        // validation runs first, so even an unknown talk reports the field error
        let err = service
            .submit_question("any-talk", request("Too short"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_persistence_failure_is_surfaced() {
        let service = TalksService::new(store(), Arc::new(FailingRepository));

        let err = service
            .submit_question("t1", request("Why does this matter for teams?"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Repository(_)));
    }

    #[tokio::test]
    async fn test_list_questions_by_talk() {
        let dir = tempfile::tempdir().unwrap();
        let service = TalksService::new(
            store(),
            Arc::new(JsonQuestionLog::new(dir.path().join("questions.json"))),
        );

        for talk_id in ["t1", "t2", "t1"] {
            service
                .submit_question(talk_id, request("What would you change next time?"))
                .await
                .unwrap();
        }

        let t1 = service.list_questions(Some("t1")).await.unwrap();
        assert_eq!(t1.len(), 2);
        assert!(t1.iter().all(|q| q.talk_id == "t1"));
        assert!(service.list_questions(Some("T1")).await.unwrap().is_empty());
    }

    #[test]
    fn test_get_talks_by_year() {
        let service = TalksService::new(store(), Arc::new(FailingRepository));
        let talks = service.get_talks(Some(2025));
        assert_eq!(talks.len(), 1);
        assert_eq!(talks[0].id, "t1");
        assert_eq!(service.get_talks(None).len(), 2);
    }
}
