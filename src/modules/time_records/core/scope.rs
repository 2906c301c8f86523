// CompanyScope is the only way admin-facing operations reach records and users.
//
// Rules
// - Only admins linked to a company get a scope.
// - Anything outside the admin's company, or soft-deleted, resolves as NotFound so other tenants'
//   records never leak through a different status.

use uuid::Uuid;

use crate::modules::time_records::core::ports::{TimeRecordRepository, Versioned};
use crate::modules::time_records::core::record::TimeRecordAggregate;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Actor;
use crate::shared::infrastructure::user_directory::{UserAccount, UserDirectory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyScope {
    admin_id: Uuid,
    company_id: Uuid,
}

impl CompanyScope {
    pub fn for_admin(actor: &Actor) -> Result<Self, ApplicationError> {
        if !actor.is_admin() {
            return Err(ApplicationError::PermissionDenied(
                "admin role required".to_string(),
            ));
        }
        let company_id = actor.company_id.ok_or_else(|| {
            ApplicationError::PermissionDenied("user is not linked to a company".to_string())
        })?;
        Ok(Self {
            admin_id: actor.id,
            company_id,
        })
    }

    pub fn admin_id(&self) -> Uuid {
        self.admin_id
    }

    pub fn company_id(&self) -> Uuid {
        self.company_id
    }

    pub fn admits(&self, aggregate: &TimeRecordAggregate) -> bool {
        aggregate.record.company_id == self.company_id && aggregate.is_active()
    }

    pub async fn resolve_record<TRepository>(
        &self,
        repository: &TRepository,
        record_id: Uuid,
        operation: &'static str,
    ) -> Result<Versioned<TimeRecordAggregate>, ApplicationError>
    where
        TRepository: TimeRecordRepository + ?Sized,
    {
        repository
            .find_active_by_id(record_id)
            .await
            .map_err(ApplicationError::internal(operation))?
            .filter(|loaded| self.admits(&loaded.value))
            .ok_or_else(|| ApplicationError::NotFound("time record not found".to_string()))
    }

    pub async fn resolve_user<TDirectory>(
        &self,
        directory: &TDirectory,
        user_id: Uuid,
        operation: &'static str,
    ) -> Result<UserAccount, ApplicationError>
    where
        TDirectory: UserDirectory + ?Sized,
    {
        directory
            .find_active(user_id)
            .await
            .map_err(ApplicationError::internal(operation))?
            .filter(|account| account.company_id == Some(self.company_id))
            .ok_or_else(|| ApplicationError::NotFound("user not found in this company".to_string()))
    }
}
