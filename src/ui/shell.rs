use anyhow::Result;

use crate::{
    domain::events::AppEvent,
    runtime::ChainBridge,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, PanelOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    bridge: &ChainBridge,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn PanelOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        node_endpoint = %context.config.node.endpoint,
        "starting TUI panel"
    );

    let mut terminal = TerminalSession::new()?;

    while orchestrator.state().is_running() {
        for update in bridge.poll_updates() {
            orchestrator.handle_event(AppEvent::Chain(update))?;
        }

        terminal.draw(|frame| view::render(frame, orchestrator.state()))?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
