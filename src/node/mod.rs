//! Fullnode REST integration: wire types and the read-only HTTP client.

pub mod client;
pub mod types;

/// Returns the node module name for smoke checks.
pub fn module_name() -> &'static str {
    "node"
}
