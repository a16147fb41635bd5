//! HTTP handlers for the user and order registries.

pub mod health;
pub mod helpers;
pub mod order;
pub mod user;

pub use health::{HealthResponse, order_health, user_health};
pub use helpers::method_not_allowed;
pub use order::{create_order, get_order, list_orders, list_user_orders};
pub use user::{create_user, get_user, list_users};
