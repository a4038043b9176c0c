use super::chain::{ModuleInfo, ResourceRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    Chain(ChainUpdate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }
}

/// Completions arriving from the chain worker. Each carries the address it
/// was fetched for; state application overwrites unconditionally, so a late
/// response for a stale address still lands (a documented property of the
/// single-address session, not something the panel guards against).
#[derive(Debug, Clone, PartialEq)]
pub enum ChainUpdate {
    AccountReady {
        address: String,
        sequence_number: String,
    },
    ModulesReady {
        address: String,
        modules: Vec<ModuleInfo>,
    },
    ResourcesReady {
        address: String,
        resources: Vec<ResourceRecord>,
    },
    SubmitFinished {
        accepted: bool,
        detail: String,
    },
}
