//! Repository trait definitions

use async_trait::async_trait;

use crate::errors::RepositoryResult;
use crate::models::QuestionRecord;

/// Append-only storage for submitted questions
///
/// Implementations never mutate or remove an appended record.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Persist one record at the end of the log
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Log length after the append
    /// * `Err(RepositoryError)` - The record was not persisted
    async fn append(&self, record: QuestionRecord) -> RepositoryResult<usize>;

    /// Every persisted record, in append order
    async fn find_all(&self) -> RepositoryResult<Vec<QuestionRecord>>;

    /// Human-readable location of the backing store, for diagnostics
    fn location(&self) -> String;
}
