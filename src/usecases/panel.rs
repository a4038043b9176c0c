//! Event orchestration for the account message panel.

use anyhow::Result;

use crate::domain::{
    encode::string_to_hex,
    events::{AppEvent, ChainUpdate, KeyInput},
    panel_state::{PanelFocus, PanelState, StatusKind},
};

use super::{
    contracts::PanelOrchestrator,
    submit_message::{submit_message, MessageSubmitter, SubmitError},
};

pub struct DefaultPanelOrchestrator<S: MessageSubmitter> {
    state: PanelState,
    submitter: S,
}

impl<S: MessageSubmitter> DefaultPanelOrchestrator<S> {
    pub fn new(state: PanelState, submitter: S) -> Self {
        Self { state, submitter }
    }

    fn handle_key(&mut self, input: KeyInput) {
        match self.state.focus() {
            PanelFocus::View => self.handle_view_key(input),
            PanelFocus::Editor => self.handle_editor_key(input),
        }
    }

    fn handle_view_key(&mut self, input: KeyInput) {
        match input.key.as_str() {
            "q" => self.state.stop(),
            "i" | "e" => {
                if self.state.has_message_module() {
                    self.state.focus_editor();
                }
            }
            "enter" => self.try_submit(),
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, input: KeyInput) {
        match input.key.as_str() {
            "esc" => self.state.focus_view(),
            "enter" => self.try_submit(),
            "backspace" => {
                self.state.draft_mut().delete_char_before();
            }
            "delete" => {
                self.state.draft_mut().delete_char_at();
            }
            "left" => self.state.draft_mut().move_cursor_left(),
            "right" => self.state.draft_mut().move_cursor_right(),
            "home" => self.state.draft_mut().move_cursor_home(),
            "end" => self.state.draft_mut().move_cursor_end(),
            key => {
                let mut chars = key.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    if !input.ctrl {
                        self.state.draft_mut().insert_char(ch);
                    }
                }
            }
        }
    }

    fn handle_chain_update(&mut self, update: ChainUpdate) {
        match update {
            ChainUpdate::AccountReady {
                sequence_number, ..
            } => self.state.apply_account(sequence_number),
            ChainUpdate::ModulesReady { modules, .. } => self.state.apply_modules(modules),
            ChainUpdate::ResourcesReady { resources, .. } => self.state.apply_resources(resources),
            ChainUpdate::SubmitFinished { accepted, detail } => {
                self.state.finish_submit(accepted, &detail);
            }
        }
    }

    fn try_submit(&mut self) {
        let result = submit_message(
            &mut self.submitter,
            self.state.is_submitting(),
            self.state.address(),
            self.state.draft().text(),
        );

        match result {
            Ok(()) => {
                tracing::debug!(
                    message_hex = %string_to_hex(self.state.draft().text()),
                    "set_message submitted"
                );
                self.state.begin_submit();
            }
            // Precondition misses are silent; the panel simply stays as is.
            Err(SubmitError::AlreadyInFlight)
            | Err(SubmitError::MissingAddress)
            | Err(SubmitError::EmptyMessage) => {}
            Err(SubmitError::Rejected) => {
                tracing::warn!("wallet rejected the transaction");
                self.state
                    .set_status(StatusKind::Failure, "Submit failed: wallet rejected");
            }
            Err(SubmitError::TemporarilyUnavailable) => {
                tracing::warn!("wallet unavailable during submit");
                self.state
                    .set_status(StatusKind::Failure, "Submit failed: wallet unavailable");
            }
        }
    }
}

impl<S: MessageSubmitter> PanelOrchestrator for DefaultPanelOrchestrator<S> {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(input) => self.handle_key(input),
            AppEvent::Chain(update) => self.handle_chain_update(update),
        }

        Ok(())
    }
}
