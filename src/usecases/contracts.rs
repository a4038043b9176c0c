use anyhow::Result;

use crate::domain::{events::AppEvent, panel_state::PanelState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait PanelOrchestrator {
    fn state(&self) -> &PanelState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}
