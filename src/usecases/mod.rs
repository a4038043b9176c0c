pub mod bootstrap;
pub mod connect_wallet;
pub mod contracts;
pub mod context;
pub mod panel;
pub mod submit_message;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
