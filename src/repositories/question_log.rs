//! JSON-file backed question log
//!
//! The log is a single JSON array rewritten on every append. Appends hold
//! `write_lock` across the whole read-modify-write so submissions inside one
//! process cannot overwrite each other, and the new document is written to a
//! sibling temp file and renamed into place so readers never see a partial
//! array.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::traits::QuestionRepository;
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::QuestionRecord;

#[derive(Debug, Clone)]
pub struct JsonQuestionLog {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonQuestionLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_records(&self) -> RepositoryResult<Vec<QuestionRecord>> {
        let contents = match fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RepositoryError::io(&self.path, e)),
        };

        if contents.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&contents)
            .map_err(|e| RepositoryError::serialization(&self.path, e))
    }

    async fn write_records(&self, records: &[QuestionRecord]) -> RepositoryResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::io(parent, e))?;
        }

        let body = serde_json::to_vec_pretty(records)
            .map_err(|e| RepositoryError::serialization(&self.path, e))?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        let result = match fs::write(&tmp_path, body).await {
            Ok(()) => fs::rename(&tmp_path, &self.path)
                .await
                .map_err(|e| RepositoryError::io(&self.path, e)),
            Err(e) => Err(RepositoryError::io(&tmp_path, e)),
        };

        if result.is_err() {
            if let Err(e) = fs::remove_file(&tmp_path).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %tmp_path.display(), "Failed to remove temp file: {}", e);
                }
            }
        }
        result
    }
}

#[async_trait]
impl QuestionRepository for JsonQuestionLog {
    async fn append(&self, record: QuestionRecord) -> RepositoryResult<usize> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        debug!(
            question_id = %record.id,
            talk_id = %record.talk_id,
            existing = records.len(),
            "Appending question"
        );
        records.push(record);
        self.write_records(&records).await?;

        Ok(records.len())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<QuestionRecord>> {
        self.read_records().await
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
