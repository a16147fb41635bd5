//! User & Order Registries
//!
//! Two small HTTP services over memory-resident collections. The order
//! registry checks that the referenced user exists before accepting an order.
//!
//! # Modules
//!
//! - [`core_types`] - Id type aliases
//! - [`models`] - `User` / `Order` records and their create drafts
//! - [`store`] - Mutex-guarded, monotonically keyed record store
//! - [`oracle`] - User-existence check (in-process or remote)
//! - [`gateway`] - HTTP routers, handlers and the service layer
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

// Core types - must be first!
pub mod core_types;

pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod oracle;
pub mod store;

// Convenient re-exports at crate root
pub use core_types::{OrderId, RecordId, UserId};
pub use gateway::services::ServiceError;
pub use models::{NewOrder, NewUser, Order, User};
pub use oracle::{ExistenceOracle, HttpUserOracle, OracleError, StoreOracle, UnavailablePolicy};
pub use store::{Record, RecordStore};
