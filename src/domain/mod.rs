//! Domain model: chain entities, the message draft, panel state and events.

pub mod chain;
pub mod draft;
pub mod encode;
pub mod events;
pub mod panel_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
