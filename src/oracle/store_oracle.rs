//! Oracle backed by an in-process user store.
//!
//! Used when both registries run in one process and share the user store.

use std::sync::Arc;

use async_trait::async_trait;

use super::{ExistenceOracle, OracleError};
use crate::core_types::RecordId;
use crate::store::{Record, RecordStore};

pub struct StoreOracle<T> {
    store: Arc<RecordStore<T>>,
}

impl<T: Record> StoreOracle<T> {
    pub fn new(store: Arc<RecordStore<T>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<T: Record> ExistenceOracle for StoreOracle<T> {
    fn name(&self) -> &'static str {
        "store"
    }

    async fn exists(&self, id: RecordId) -> Result<bool, OracleError> {
        Ok(self.store.contains(id))
    }
}
