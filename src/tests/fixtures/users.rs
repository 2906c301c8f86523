use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::core::identity::{Actor, Lifecycle, Role};
use crate::shared::infrastructure::user_directory::UserAccount;
use crate::tests::fixtures::COMPANY_A;

pub struct UserAccountBuilder {
    inner: UserAccount,
}

impl Default for UserAccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UserAccountBuilder {
    pub fn new() -> Self {
        let id = Uuid::now_v7();
        Self {
            inner: UserAccount {
                id,
                name: "Una User".to_string(),
                email: format!("{id}@acme.test"),
                company_id: Some(COMPANY_A),
                role: Role::User,
                lifecycle: Lifecycle::Active,
            },
        }
    }

    pub fn id(mut self, v: Uuid) -> Self {
        self.inner.id = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn company_id(mut self, v: Uuid) -> Self {
        self.inner.company_id = Some(v);
        self
    }

    pub fn without_company(mut self) -> Self {
        self.inner.company_id = None;
        self
    }

    pub fn admin(mut self) -> Self {
        self.inner.role = Role::Admin;
        self
    }

    pub fn deleted_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.lifecycle = Lifecycle::Deleted { at: v };
        self
    }

    pub fn build(self) -> UserAccount {
        self.inner
    }

    pub fn actor(self) -> Actor {
        Actor::from(&self.inner)
    }
}
