//! Order Service - business logic for the order registry
//!
//! Creating an order first asks the existence oracle about `user_id`, and
//! only then touches the order store. The oracle call never overlaps the
//! store lock.

use std::time::Duration;

use crate::core_types::{OrderId, UserId};
use crate::models::{NewOrder, Order};
use crate::oracle::{ExistenceOracle, OracleError, UnavailablePolicy};
use crate::store::RecordStore;

use super::ServiceError;

pub struct OrderService<'a> {
    orders: &'a RecordStore<Order>,
    oracle: &'a dyn ExistenceOracle,
    oracle_timeout: Duration,
    on_unavailable: UnavailablePolicy,
}

impl<'a> OrderService<'a> {
    pub fn new(
        orders: &'a RecordStore<Order>,
        oracle: &'a dyn ExistenceOracle,
        oracle_timeout: Duration,
        on_unavailable: UnavailablePolicy,
    ) -> Self {
        Self {
            orders,
            oracle,
            oracle_timeout,
            on_unavailable,
        }
    }

    pub fn list(&self) -> Vec<Order> {
        self.orders.list()
    }

    pub fn get(&self, id: OrderId) -> Result<Order, ServiceError> {
        self.orders
            .get(id)
            .ok_or(ServiceError::NotFound { kind: "Order", id })
    }

    /// Orders placed by `user_id`. No match is an empty list, not an error.
    pub fn by_user(&self, user_id: UserId) -> Vec<Order> {
        self.orders.filter(|order| order.user_id == user_id)
    }

    /// Validate the referenced user, then store the order.
    pub async fn create(&self, draft: NewOrder) -> Result<Order, ServiceError> {
        let user_id = draft.user_id;

        match self.check_user(user_id).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::info!("[ORDER] Rejected: user {} does not exist", user_id);
                return Err(ServiceError::Referential(user_id));
            }
            Err(OracleError::Unavailable(reason)) => match self.on_unavailable {
                UnavailablePolicy::FailClosed => {
                    tracing::error!(
                        "[ORDER] Rejected: cannot verify user {} via {} oracle: {}",
                        user_id,
                        self.oracle.name(),
                        reason
                    );
                    return Err(ServiceError::OracleUnavailable(reason));
                }
                UnavailablePolicy::FailOpen => {
                    tracing::warn!(
                        "[ORDER] Accepting unverified user {} ({} oracle unavailable: {})",
                        user_id,
                        self.oracle.name(),
                        reason
                    );
                }
            },
        }

        let order = self.orders.create(draft);
        tracing::info!(
            "[ORDER] Created order {} for user {} ({:?})",
            order.id,
            order.user_id,
            order.product_name
        );
        Ok(order)
    }

    async fn check_user(&self, user_id: UserId) -> Result<bool, OracleError> {
        match tokio::time::timeout(self.oracle_timeout, self.oracle.exists(user_id)).await {
            Ok(result) => result,
            Err(_) => Err(OracleError::Unavailable(format!(
                "no answer within {}ms",
                self.oracle_timeout.as_millis()
            ))),
        }
    }
}
