//! Existence Oracle
//!
//! The order registry asks an oracle whether a user id exists before it
//! accepts an order. The oracle is injected as `Arc<dyn ExistenceOracle>`,
//! so the order service does not care whether the answer comes from an
//! in-process user store or a remote user service.
//!
//! An oracle that cannot answer returns [`OracleError::Unavailable`]. That is
//! never the same thing as "does not exist"; the caller decides what to do
//! with it (see [`UnavailablePolicy`]).

pub mod http;
pub mod store_oracle;

pub use http::HttpUserOracle;
pub use store_oracle::StoreOracle;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core_types::RecordId;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("existence oracle unavailable: {0}")]
    Unavailable(String),
}

/// Answers "does a record with this id exist" for some other store.
///
/// Implementations must not require the caller to hold any record store lock.
#[async_trait]
pub trait ExistenceOracle: Send + Sync {
    /// Oracle name for logging
    fn name(&self) -> &'static str;

    async fn exists(&self, id: RecordId) -> Result<bool, OracleError>;
}

/// What the order service does when the oracle cannot answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailablePolicy {
    /// Reject the create.
    #[default]
    FailClosed,
    /// Accept the create without a check.
    FailOpen,
}

/// Mock oracle for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    pub struct MockOracle {
        known: Mutex<HashSet<RecordId>>,
        unavailable: Mutex<bool>,
        delay: Mutex<Option<Duration>>,
        calls: AtomicUsize,
    }

    impl MockOracle {
        pub fn with_ids(ids: impl IntoIterator<Item = RecordId>) -> Self {
            Self {
                known: Mutex::new(ids.into_iter().collect()),
                unavailable: Mutex::new(false),
                delay: Mutex::new(None),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn set_unavailable(&self, unavailable: bool) {
            *self.unavailable.lock().unwrap() = unavailable;
        }

        pub fn set_delay(&self, delay: Duration) {
            *self.delay.lock().unwrap() = Some(delay);
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ExistenceOracle for MockOracle {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn exists(&self, id: RecordId) -> Result<bool, OracleError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let delay = *self.delay.lock().unwrap();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if *self.unavailable.lock().unwrap() {
                return Err(OracleError::Unavailable("mock outage".to_string()));
            }
            Ok(self.known.lock().unwrap().contains(&id))
        }
    }
}
