// User lookup collaborator.
//
// Purpose
// - Resolve a user to its company, role and lifecycle without owning user management.
//
// Boundaries
// - Soft-deleted users are never returned. Callers treat them as absent.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::core::identity::{Actor, Lifecycle, Role};

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company_id: Option<Uuid>,
    pub role: Role,
    pub lifecycle: Lifecycle,
}

impl From<&UserAccount> for Actor {
    fn from(account: &UserAccount) -> Self {
        Actor {
            id: account.id,
            company_id: account.company_id,
            role: account.role,
        }
    }
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_active(&self, user_id: Uuid) -> Result<Option<UserAccount>, DirectoryError>;
}

pub mod in_memory;
