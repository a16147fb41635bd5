//! Registry services entry point
//!
//! ```text
//! registry_services [--env dev] [--service users|orders|all] [--port N]
//! ```
//!
//! - `users`  - user registry only
//! - `orders` - order registry only; users are checked over HTTP against
//!   `oracle.user_service_url`
//! - `all`    - both registries in one process (default); orders check the
//!   shared user store directly
//!
//! `--port` overrides the listener port of a single-registry mode.

use std::sync::Arc;

use anyhow::{Context, bail};

use registry_services::config::{AppConfig, ServiceConfig};
use registry_services::gateway::{self, state::OrderState, state::UserState};
use registry_services::logging::init_logging;
use registry_services::oracle::HttpUserOracle;
use registry_services::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServiceMode {
    Users,
    Orders,
    All,
}

impl ServiceMode {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw {
            "users" => Ok(Self::Users),
            "orders" => Ok(Self::Orders),
            "all" => Ok(Self::All),
            other => bail!("Unknown service {:?} (expected users, orders or all)", other),
        }
    }
}

/// Value following `flag` on the command line
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn get_env(args: &[String]) -> String {
    arg_value(args, "--env")
        .or_else(|| arg_value(args, "-e"))
        .unwrap_or_else(|| "dev".to_string())
}

fn get_mode(args: &[String]) -> anyhow::Result<ServiceMode> {
    match arg_value(args, "--service") {
        Some(raw) => ServiceMode::parse(&raw),
        None => Ok(ServiceMode::All),
    }
}

/// Get port override from command line (--port argument)
fn get_port_override(args: &[String]) -> anyhow::Result<Option<u16>> {
    arg_value(args, "--port")
        .map(|raw| raw.parse::<u16>().with_context(|| format!("Invalid --port {:?}", raw)))
        .transpose()
}

fn with_port(service: &ServiceConfig, port: Option<u16>) -> ServiceConfig {
    let mut service = service.clone();
    if let Some(port) = port {
        service.port = port;
    }
    service
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let env = get_env(&args);
    let mode = get_mode(&args)?;
    let port_override = get_port_override(&args)?;

    let config = AppConfig::load(&env)?;
    let _log_guard = init_logging(&config)?;

    tracing::info!("Starting registry services ({:?}) in {} mode", mode, env);

    match mode {
        ServiceMode::Users => {
            let service = with_port(&config.users, port_override);
            let state = Arc::new(UserState::new(Arc::new(RecordStore::new())));
            gateway::serve(
                "User",
                &service.addr(),
                gateway::user_router(state),
                gateway::shutdown_signal(),
            )
            .await
        }
        ServiceMode::Orders => {
            let service = with_port(&config.orders, port_override);
            let oracle = HttpUserOracle::new(
                config.oracle.user_service_url.clone(),
                config.oracle.attempt_timeout(),
                config.oracle.retry_transient,
            )?;
            tracing::info!(
                "Order registry checks users at {} (timeout {}ms, on unavailable: {:?})",
                oracle.base_url(),
                config.oracle.timeout_ms,
                config.oracle.on_unavailable
            );
            let state = Arc::new(OrderState::new(
                Arc::new(RecordStore::new()),
                Arc::new(oracle),
                &config.oracle,
            ));
            gateway::serve(
                "Order",
                &service.addr(),
                gateway::order_router(state),
                gateway::shutdown_signal(),
            )
            .await
        }
        ServiceMode::All => {
            if port_override.is_some() {
                tracing::warn!("--port is ignored when running all registries");
            }
            let (users, orders) = gateway::local_routers(&config.oracle);
            let users_addr = config.users.addr();
            let orders_addr = config.orders.addr();
            tokio::try_join!(
                gateway::serve("User", &users_addr, users, gateway::shutdown_signal()),
                gateway::serve("Order", &orders_addr, orders, gateway::shutdown_signal()),
            )?;
            Ok(())
        }
    }
}
