// Query handler for time records.
//
// Purpose
// - Self-service reads scoped to the caller, and company-wide reads for admins.
//
// Rules
// - Reads go through the active-only repository accessors, so soft-deleted records never show.
// - Admin reads resolve through CompanyScope; a record of another company is NotFound.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::time_records::core::ports::TimeRecordRepository;
use crate::modules::time_records::core::record::TimeRecordAggregate;
use crate::modules::time_records::core::scope::CompanyScope;
use crate::modules::time_records::use_cases::query_time_records::projection::AdminTimeRecordView;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Actor;
use crate::shared::core::primitives::normalize;
use crate::shared::infrastructure::user_directory::{UserAccount, UserDirectory};

const LIST_OPERATION: &str = "failed to list time records";
const LOAD_OPERATION: &str = "failed to load time record";

pub struct TimeRecordQueries<TRepository, TDirectory>
where
    TRepository: TimeRecordRepository + 'static,
    TDirectory: UserDirectory + 'static,
{
    repository: Arc<TRepository>,
    directory: Arc<TDirectory>,
}

impl<TRepository, TDirectory> TimeRecordQueries<TRepository, TDirectory>
where
    TRepository: TimeRecordRepository + 'static,
    TDirectory: UserDirectory + 'static,
{
    pub fn new(repository: Arc<TRepository>, directory: Arc<TDirectory>) -> Self {
        Self {
            repository,
            directory,
        }
    }

    pub async fn list_mine(
        &self,
        actor: &Actor,
    ) -> Result<Vec<TimeRecordAggregate>, ApplicationError> {
        self.repository
            .list_active_by_user(actor.id)
            .await
            .map_err(ApplicationError::internal(LIST_OPERATION))
    }

    pub async fn find_mine_by_day(
        &self,
        actor: &Actor,
        day: DateTime<Utc>,
    ) -> Result<TimeRecordAggregate, ApplicationError> {
        self.repository
            .find_active_for_day(actor.id, normalize(day))
            .await
            .map_err(ApplicationError::internal(LOAD_OPERATION))?
            .map(|loaded| loaded.value)
            .ok_or_else(|| {
                ApplicationError::NotFound("no time record for the given date".to_string())
            })
    }

    pub async fn list_company(
        &self,
        admin: &Actor,
    ) -> Result<Vec<AdminTimeRecordView>, ApplicationError> {
        let scope = CompanyScope::for_admin(admin)?;
        let records = self
            .repository
            .list_active_by_company(scope.company_id())
            .await
            .map_err(ApplicationError::internal(LIST_OPERATION))?;

        let mut accounts = HashMap::new();
        let mut views = Vec::with_capacity(records.len());
        for aggregate in &records {
            views.push(self.project(aggregate, &mut accounts, LIST_OPERATION).await?);
        }
        Ok(views)
    }

    pub async fn find_in_company(
        &self,
        admin: &Actor,
        record_id: Uuid,
    ) -> Result<AdminTimeRecordView, ApplicationError> {
        let scope = CompanyScope::for_admin(admin)?;
        let loaded = scope
            .resolve_record(self.repository.as_ref(), record_id, LOAD_OPERATION)
            .await?;
        self.admin_view(&loaded.value, LOAD_OPERATION).await
    }

    /// Builds the enriched admin view of a single record.
    pub async fn admin_view(
        &self,
        aggregate: &TimeRecordAggregate,
        operation: &'static str,
    ) -> Result<AdminTimeRecordView, ApplicationError> {
        self.project(aggregate, &mut HashMap::new(), operation).await
    }

    /// Admin view of a record that was just written. A failed owner lookup no longer undoes the
    /// committed write; the summaries are left empty instead.
    pub async fn admin_view_after_write(
        &self,
        aggregate: &TimeRecordAggregate,
        operation: &'static str,
    ) -> AdminTimeRecordView {
        match self.admin_view(aggregate, operation).await {
            Ok(view) => view,
            Err(error) => {
                tracing::warn!(
                    record_id = %aggregate.id(),
                    %error,
                    "returning the written record without user summaries"
                );
                AdminTimeRecordView::new(aggregate, None, None)
            }
        }
    }

    async fn project(
        &self,
        aggregate: &TimeRecordAggregate,
        accounts: &mut HashMap<Uuid, Option<UserAccount>>,
        operation: &'static str,
    ) -> Result<AdminTimeRecordView, ApplicationError> {
        let owner = self
            .lookup(aggregate.record.user_id, accounts, operation)
            .await?;
        let closer = match aggregate.record.closed_by_id {
            Some(closer_id) => self.lookup(closer_id, accounts, operation).await?,
            None => None,
        };
        Ok(AdminTimeRecordView::new(
            aggregate,
            owner.as_ref(),
            closer.as_ref(),
        ))
    }

    async fn lookup(
        &self,
        user_id: Uuid,
        accounts: &mut HashMap<Uuid, Option<UserAccount>>,
        operation: &'static str,
    ) -> Result<Option<UserAccount>, ApplicationError> {
        if let Some(cached) = accounts.get(&user_id) {
            return Ok(cached.clone());
        }
        let account = self
            .directory
            .find_active(user_id)
            .await
            .map_err(ApplicationError::internal(operation))?;
        accounts.insert(user_id, account.clone());
        Ok(account)
    }
}
