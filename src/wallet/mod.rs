//! Wallet integration: the connector contract, the transaction payload, and
//! the HTTP adapter for the external wallet agent.

pub mod agent;
pub mod connector;
pub mod payload;

/// Returns the wallet module name for smoke checks.
pub fn module_name() -> &'static str {
    "wallet"
}
