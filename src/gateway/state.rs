use std::sync::Arc;
use std::time::Duration;

use crate::config::OracleConfig;
use crate::gateway::services::{OrderService, UserService};
use crate::models::{Order, User};
use crate::oracle::{ExistenceOracle, UnavailablePolicy};
use crate::store::RecordStore;

/// User registry state (shared)
#[derive(Clone)]
pub struct UserState {
    pub users: Arc<RecordStore<User>>,
}

impl UserState {
    pub fn new(users: Arc<RecordStore<User>>) -> Self {
        Self { users }
    }

    pub fn service(&self) -> UserService<'_> {
        UserService::new(&self.users)
    }
}

/// Order registry state (shared)
#[derive(Clone)]
pub struct OrderState {
    pub orders: Arc<RecordStore<Order>>,
    /// User-existence check, consulted before every create
    pub oracle: Arc<dyn ExistenceOracle>,
    pub oracle_timeout: Duration,
    pub on_unavailable: UnavailablePolicy,
}

impl OrderState {
    pub fn new(
        orders: Arc<RecordStore<Order>>,
        oracle: Arc<dyn ExistenceOracle>,
        oracle_config: &OracleConfig,
    ) -> Self {
        Self {
            orders,
            oracle,
            oracle_timeout: oracle_config.timeout(),
            on_unavailable: oracle_config.on_unavailable,
        }
    }

    pub fn service(&self) -> OrderService<'_> {
        OrderService::new(
            &self.orders,
            self.oracle.as_ref(),
            self.oracle_timeout,
            self.on_unavailable,
        )
    }
}
