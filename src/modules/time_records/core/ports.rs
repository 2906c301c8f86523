// Ports define what the time record core needs from the outside world.
//
// Responsibilities
// - Describe persistence as a trait so the core never depends on a database.
//
// Atomicity
// - `save` writes the record row and all of its break rows as a single unit.
// - Optimistic versioning guards the read-decide-write sequence: a save made from a stale read
//   fails with VersionMismatch, and a second active record for the same user and day fails
//   with DuplicateDay. Two concurrent punches can therefore never both commit.
//
// Visibility
// - Every read returns active (not soft-deleted) records only.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::modules::time_records::core::record::TimeRecordAggregate;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("a time record already exists for user {user_id} on {date}")]
    DuplicateDay { user_id: Uuid, date: DateTime<Utc> },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<T> {
    pub value: T,
    pub version: i64,
}

#[async_trait]
pub trait TimeRecordRepository: Send + Sync {
    async fn find_active_for_day(
        &self,
        user_id: Uuid,
        date: DateTime<Utc>,
    ) -> Result<Option<Versioned<TimeRecordAggregate>>, RepositoryError>;

    async fn find_active_by_id(
        &self,
        record_id: Uuid,
    ) -> Result<Option<Versioned<TimeRecordAggregate>>, RepositoryError>;

    /// Most recent day first.
    async fn list_active_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<TimeRecordAggregate>, RepositoryError>;

    /// Most recent day first.
    async fn list_active_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<TimeRecordAggregate>, RepositoryError>;

    /// Persists the aggregate if the stored version still equals `expected_version` (0 inserts).
    /// Returns the new version.
    async fn save(
        &self,
        aggregate: &TimeRecordAggregate,
        expected_version: i64,
    ) -> Result<i64, RepositoryError>;
}
