// In memory implementation of the TimeRecordRepository port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Store each record with its breaks as one versioned entry.
// - Apply a save under a single write lock, so a save is all-or-nothing.
// - Enforce optimistic versioning and one active record per user and day.
// - Route every read through `active`, so soft-deleted records never leave the adapter.

use crate::modules::time_records::core::ports::{RepositoryError, TimeRecordRepository, Versioned};
use crate::modules::time_records::core::record::TimeRecordAggregate;
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryTimeRecords {
    inner: RwLock<HashMap<Uuid, Versioned<TimeRecordAggregate>>>,
    is_offline: bool,
    delay_save_ms: u64,
}

impl InMemoryTimeRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delays every save before it takes the lock. Lets tests interleave two read-decide-write
    /// sequences.
    pub fn set_delay_save_ms(&mut self, delay_ms: u64) {
        self.delay_save_ms = delay_ms;
    }

    /// Every stored entry, soft-deleted ones included.
    pub async fn count_all(&self) -> usize {
        self.inner.read().await.len()
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Time record repository offline".into()));
        }
        Ok(())
    }

    fn active(
        entries: &HashMap<Uuid, Versioned<TimeRecordAggregate>>,
    ) -> impl Iterator<Item = &Versioned<TimeRecordAggregate>> {
        entries.values().filter(|entry| entry.value.is_active())
    }

    fn most_recent_first<'a>(
        entries: impl Iterator<Item = &'a Versioned<TimeRecordAggregate>>,
    ) -> Vec<TimeRecordAggregate> {
        let mut items: Vec<TimeRecordAggregate> =
            entries.map(|entry| entry.value.clone()).collect();
        items.sort_by_key(|aggregate| Reverse((aggregate.record.date, aggregate.record.clock_in)));
        items
    }
}

#[async_trait::async_trait]
impl TimeRecordRepository for InMemoryTimeRecords {
    async fn find_active_for_day(
        &self,
        user_id: Uuid,
        date: DateTime<Utc>,
    ) -> Result<Option<Versioned<TimeRecordAggregate>>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(Self::active(&guard)
            .find(|entry| entry.value.record.user_id == user_id && entry.value.record.date == date)
            .cloned())
    }

    async fn find_active_by_id(
        &self,
        record_id: Uuid,
    ) -> Result<Option<Versioned<TimeRecordAggregate>>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(Self::active(&guard)
            .find(|entry| entry.value.id() == record_id)
            .cloned())
    }

    async fn list_active_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<TimeRecordAggregate>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(Self::most_recent_first(
            Self::active(&guard).filter(|entry| entry.value.record.user_id == user_id),
        ))
    }

    async fn list_active_by_company(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<TimeRecordAggregate>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(Self::most_recent_first(
            Self::active(&guard).filter(|entry| entry.value.record.company_id == company_id),
        ))
    }

    async fn save(
        &self,
        aggregate: &TimeRecordAggregate,
        expected_version: i64,
    ) -> Result<i64, RepositoryError> {
        if self.delay_save_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_save_ms)).await;
        }
        self.ensure_online()?;

        let mut guard = self.inner.write().await;
        let actual = guard.get(&aggregate.id()).map(|entry| entry.version).unwrap_or(0);
        if actual != expected_version {
            return Err(RepositoryError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }

        let record = &aggregate.record;
        if aggregate.is_active() {
            let taken = Self::active(&guard).any(|entry| {
                entry.value.id() != record.id
                    && entry.value.record.user_id == record.user_id
                    && entry.value.record.date == record.date
            });
            if taken {
                return Err(RepositoryError::DuplicateDay {
                    user_id: record.user_id,
                    date: record.date,
                });
            }
        }

        let version = actual + 1;
        guard.insert(
            record.id,
            Versioned {
                value: aggregate.clone(),
                version,
            },
        );
        Ok(version)
    }
}
