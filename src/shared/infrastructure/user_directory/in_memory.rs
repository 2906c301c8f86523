// In memory implementation of the UserDirectory port.
//
// Purpose
// - Back local development and tests without a user database.
// - Load an initial set of users from a JSON seed file.

use crate::shared::core::identity::{Lifecycle, Role};
use crate::shared::infrastructure::user_directory::{DirectoryError, UserAccount, UserDirectory};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company_id: Option<Uuid>,
    pub role: Role,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<SeedUser> for UserAccount {
    fn from(seed: SeedUser) -> Self {
        UserAccount {
            id: seed.id,
            name: seed.name,
            email: seed.email,
            company_id: seed.company_id,
            role: seed.role,
            lifecycle: Lifecycle::from(seed.deleted_at),
        }
    }
}

#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<Uuid, UserAccount>>,
    is_offline: bool,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed_json(json: &str) -> Result<Self, serde_json::Error> {
        let seeds: Vec<SeedUser> = serde_json::from_str(json)?;
        let users = seeds
            .into_iter()
            .map(|seed| (seed.id, UserAccount::from(seed)))
            .collect();
        Ok(Self {
            users: RwLock::new(users),
            is_offline: false,
        })
    }

    pub async fn insert(&self, account: UserAccount) {
        self.users.write().await.insert(account.id, account);
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_active(&self, user_id: Uuid) -> Result<Option<UserAccount>, DirectoryError> {
        if self.is_offline {
            return Err(DirectoryError::Backend("User directory offline".into()));
        }
        Ok(self
            .users
            .read()
            .await
            .get(&user_id)
            .filter(|account| account.lifecycle.is_active())
            .cloned())
    }
}
