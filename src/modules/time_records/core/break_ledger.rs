// Break ledger: the rules every write to a record's breaks must respect.
//
// Invariants
// - At most one open break (no `ended_at`) per record.
// - When `ended_at` is present it is strictly after `started_at`.
// - Breaks are kept in chronological order of `started_at`.
//
// Both the punch cycle and the admin corrections go through these functions. Validation always
// runs against the values that would be stored, before anything is mutated.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::modules::time_records::core::record::{BreakRecord, TimeRecordAggregate};
use crate::shared::core::errors::ApplicationError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BreakLedgerError {
    #[error("an open break already exists on this time record")]
    OpenBreakExists,

    #[error("endedAt must be after startedAt")]
    EndNotAfterStart,

    #[error("break not found on this time record")]
    BreakNotFound,
}

impl From<BreakLedgerError> for ApplicationError {
    fn from(error: BreakLedgerError) -> Self {
        match error {
            BreakLedgerError::OpenBreakExists => ApplicationError::Conflict(error.to_string()),
            BreakLedgerError::EndNotAfterStart => {
                ApplicationError::InvalidArgument(error.to_string())
            }
            BreakLedgerError::BreakNotFound => ApplicationError::NotFound(error.to_string()),
        }
    }
}

pub fn validate_interval(
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
) -> Result<(), BreakLedgerError> {
    match ended_at {
        Some(ended_at) if ended_at <= started_at => Err(BreakLedgerError::EndNotAfterStart),
        _ => Ok(()),
    }
}

impl TimeRecordAggregate {
    pub fn open_break(&self) -> Option<&BreakRecord> {
        self.breaks.iter().find(|entry| entry.is_open())
    }

    pub fn find_break(&self, break_id: Uuid) -> Option<&BreakRecord> {
        self.breaks.iter().find(|entry| entry.id == break_id)
    }

    pub fn ensure_no_open_break(&self) -> Result<(), BreakLedgerError> {
        match self.open_break() {
            Some(_) => Err(BreakLedgerError::OpenBreakExists),
            None => Ok(()),
        }
    }

    /// Adds a break after checking its interval and, for an open break, that none is open yet.
    pub fn add_break(&mut self, entry: BreakRecord) -> Result<&BreakRecord, BreakLedgerError> {
        validate_interval(entry.started_at, entry.ended_at)?;
        if entry.is_open() {
            self.ensure_no_open_break()?;
        }
        let break_id = entry.id;
        self.insert_break(entry);
        self.find_break(break_id)
            .ok_or(BreakLedgerError::BreakNotFound)
    }

    /// Changes the bounds of an existing break. Missing values keep the current ones.
    pub fn edit_break(
        &mut self,
        break_id: Uuid,
        started_at: Option<DateTime<Utc>>,
        ended_at: Option<DateTime<Utc>>,
        registered_by_id: Option<Uuid>,
    ) -> Result<&BreakRecord, BreakLedgerError> {
        let current = self
            .find_break(break_id)
            .ok_or(BreakLedgerError::BreakNotFound)?;
        let started_at = started_at.unwrap_or(current.started_at);
        let ended_at = ended_at.or(current.ended_at);
        validate_interval(started_at, ended_at)?;

        if let Some(entry) = self.breaks.iter_mut().find(|entry| entry.id == break_id) {
            entry.started_at = started_at;
            entry.ended_at = ended_at;
            entry.registered_by_id = registered_by_id;
        }
        self.sort_breaks();
        self.find_break(break_id)
            .ok_or(BreakLedgerError::BreakNotFound)
    }

    /// Closes the given break if it is still open and returns its id.
    pub(super) fn close_break(&mut self, break_id: Uuid, ended_at: DateTime<Utc>) -> Option<Uuid> {
        let entry = self
            .breaks
            .iter_mut()
            .find(|entry| entry.id == break_id && entry.is_open())?;
        entry.ended_at = Some(ended_at);
        Some(entry.id)
    }

    pub(super) fn insert_break(&mut self, entry: BreakRecord) {
        self.breaks.push(entry);
        self.sort_breaks();
    }

    fn sort_breaks(&mut self) {
        self.breaks.sort_by_key(|entry| entry.started_at);
    }
}
