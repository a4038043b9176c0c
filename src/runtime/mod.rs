//! Bridge between the synchronous TUI loop and the Tokio worker that talks
//! to the node and the wallet agent.

mod bridge;
mod worker;

pub use bridge::{BridgeSubmitter, ChainBridge, ChainCommand};

/// Returns the runtime module name for smoke checks.
pub fn module_name() -> &'static str {
    "runtime"
}
