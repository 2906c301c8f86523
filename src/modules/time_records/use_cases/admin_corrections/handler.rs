// Admin corrections handler.
//
// Responsibilities
// - Resolve everything through the admin's CompanyScope before touching a record.
// - Run the pure decide functions and save the result against the version that was read.
//
// Errors
// - Other companies' records and users surface as NotFound.
// - A lost race on the same record or day surfaces as Conflict; other storage failures become
//   Internal with the operation message.

use std::sync::Arc;

use crate::modules::time_records::core::ports::{RepositoryError, TimeRecordRepository};
use crate::modules::time_records::core::record::{BreakRecord, TimeRecordAggregate};
use crate::modules::time_records::core::scope::CompanyScope;
use crate::modules::time_records::use_cases::admin_corrections::commands::{
    AdminAddBreak, AdminCreateRecord, AdminDeleteRecord, AdminEditBreak, AdminSetClockOut,
};
use crate::modules::time_records::use_cases::admin_corrections::decide::{
    CorrectionRejected, decide_add_break, decide_create, decide_delete, decide_edit_break,
    decide_set_clock_out, validate_create,
};
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Actor;
use crate::shared::core::primitives::normalize;
use crate::shared::infrastructure::user_directory::UserDirectory;

pub const CREATE_OPERATION: &str = "failed to create time record";
pub const CLOCK_OUT_OPERATION: &str = "failed to register clock-out";
pub const ADD_BREAK_OPERATION: &str = "failed to add break";
pub const EDIT_BREAK_OPERATION: &str = "failed to edit break";
pub const DELETE_OPERATION: &str = "failed to delete time record";

fn rejected(admin: &Actor, rejected: CorrectionRejected) -> ApplicationError {
    tracing::warn!(admin_id = %admin.id, reason = %rejected, "correction rejected");
    ApplicationError::from(rejected)
}

fn save_failed(operation: &'static str) -> impl FnOnce(RepositoryError) -> ApplicationError {
    move |error| match error {
        RepositoryError::DuplicateDay { .. } => {
            ApplicationError::from(CorrectionRejected::RecordExistsForDay)
        }
        RepositoryError::VersionMismatch { .. } => ApplicationError::Conflict(
            "the time record was modified concurrently".to_string(),
        ),
        other => ApplicationError::internal(operation)(other),
    }
}

pub struct AdminCorrectionsHandler<TRepository, TDirectory>
where
    TRepository: TimeRecordRepository + 'static,
    TDirectory: UserDirectory + 'static,
{
    repository: Arc<TRepository>,
    directory: Arc<TDirectory>,
    clock: Arc<dyn Clock>,
}

impl<TRepository, TDirectory> AdminCorrectionsHandler<TRepository, TDirectory>
where
    TRepository: TimeRecordRepository + 'static,
    TDirectory: UserDirectory + 'static,
{
    pub fn new(
        repository: Arc<TRepository>,
        directory: Arc<TDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            directory,
            clock,
        }
    }

    pub async fn create(
        &self,
        admin: &Actor,
        command: AdminCreateRecord,
    ) -> Result<TimeRecordAggregate, ApplicationError> {
        let scope = CompanyScope::for_admin(admin)?;
        validate_create(&command).map_err(|error| rejected(admin, error))?;
        scope
            .resolve_user(self.directory.as_ref(), command.user_id, CREATE_OPERATION)
            .await?;

        let existing = self
            .repository
            .find_active_for_day(command.user_id, normalize(command.clock_in))
            .await
            .map_err(ApplicationError::internal(CREATE_OPERATION))?;
        let aggregate = decide_create(&scope, existing.as_ref().map(|loaded| &loaded.value), command)
            .map_err(|error| rejected(admin, error))?;
        self.repository
            .save(&aggregate, 0)
            .await
            .map_err(save_failed(CREATE_OPERATION))?;

        tracing::info!(
            admin_id = %admin.id,
            user_id = %aggregate.record.user_id,
            record_id = %aggregate.id(),
            closed = aggregate.record.clock_out.is_some(),
            "time record created"
        );
        Ok(aggregate)
    }

    pub async fn set_clock_out(
        &self,
        admin: &Actor,
        command: AdminSetClockOut,
    ) -> Result<TimeRecordAggregate, ApplicationError> {
        let scope = CompanyScope::for_admin(admin)?;
        let loaded = scope
            .resolve_record(self.repository.as_ref(), command.record_id, CLOCK_OUT_OPERATION)
            .await?;
        let aggregate = decide_set_clock_out(&scope, loaded.value, command)
            .map_err(|error| rejected(admin, error))?;
        self.repository
            .save(&aggregate, loaded.version)
            .await
            .map_err(save_failed(CLOCK_OUT_OPERATION))?;

        tracing::info!(admin_id = %admin.id, record_id = %aggregate.id(), "clock-out corrected");
        Ok(aggregate)
    }

    pub async fn add_break(
        &self,
        admin: &Actor,
        command: AdminAddBreak,
    ) -> Result<BreakRecord, ApplicationError> {
        let scope = CompanyScope::for_admin(admin)?;
        let loaded = scope
            .resolve_record(self.repository.as_ref(), command.record_id, ADD_BREAK_OPERATION)
            .await?;
        let (aggregate, added) = decide_add_break(&scope, loaded.value, command)
            .map_err(|error| rejected(admin, error))?;
        self.repository
            .save(&aggregate, loaded.version)
            .await
            .map_err(save_failed(ADD_BREAK_OPERATION))?;

        tracing::info!(
            admin_id = %admin.id,
            record_id = %aggregate.id(),
            break_id = %added.id,
            open = added.is_open(),
            "break added"
        );
        Ok(added)
    }

    pub async fn edit_break(
        &self,
        admin: &Actor,
        command: AdminEditBreak,
    ) -> Result<BreakRecord, ApplicationError> {
        let scope = CompanyScope::for_admin(admin)?;
        let loaded = scope
            .resolve_record(self.repository.as_ref(), command.record_id, EDIT_BREAK_OPERATION)
            .await?;
        let (aggregate, edited) = decide_edit_break(&scope, loaded.value, command)
            .map_err(|error| rejected(admin, error))?;
        self.repository
            .save(&aggregate, loaded.version)
            .await
            .map_err(save_failed(EDIT_BREAK_OPERATION))?;

        tracing::info!(
            admin_id = %admin.id,
            record_id = %aggregate.id(),
            break_id = %edited.id,
            "break edited"
        );
        Ok(edited)
    }

    pub async fn delete(
        &self,
        admin: &Actor,
        command: AdminDeleteRecord,
    ) -> Result<(), ApplicationError> {
        let scope = CompanyScope::for_admin(admin)?;
        let loaded = scope
            .resolve_record(self.repository.as_ref(), command.record_id, DELETE_OPERATION)
            .await?;
        let aggregate = decide_delete(loaded.value, self.clock.now());
        self.repository
            .save(&aggregate, loaded.version)
            .await
            .map_err(save_failed(DELETE_OPERATION))?;

        tracing::info!(admin_id = %admin.id, record_id = %aggregate.id(), "time record deleted");
        Ok(())
    }
}
