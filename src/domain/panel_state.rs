use super::chain::{self, ModuleInfo, ResourceRecord};
use super::draft::DraftState;

/// Which part of the panel receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    View,
    Editor,
}

/// Outcome carried by a status message, used to pick its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
}

/// A one-line status shown at the bottom of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// The whole UI state of the account message panel.
///
/// The address is obtained once at startup and treated as immutable for the
/// session; everything else is overwritten by chain updates as they arrive.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    running: bool,
    address: Option<String>,
    sequence_number: Option<String>,
    modules: Vec<ModuleInfo>,
    resources: Vec<ResourceRecord>,
    draft: DraftState,
    submitting: bool,
    focus: PanelFocus,
    status: Option<StatusMessage>,
}

impl PanelState {
    pub fn new(address: Option<String>) -> Self {
        Self {
            running: true,
            address,
            sequence_number: None,
            modules: Vec::new(),
            resources: Vec::new(),
            draft: DraftState::default(),
            submitting: false,
            focus: PanelFocus::View,
            status: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn sequence_number(&self) -> Option<&str> {
        self.sequence_number.as_deref()
    }

    pub fn has_message_module(&self) -> bool {
        chain::has_message_module(&self.modules)
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftState {
        &mut self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
    }

    /// Clears the in-flight flag. Runs on every completion, accepted or not.
    pub fn finish_submit(&mut self, accepted: bool, detail: &str) {
        self.submitting = false;
        self.status = Some(if accepted {
            StatusMessage {
                kind: StatusKind::Success,
                text: format!("Submitted: {detail}"),
            }
        } else {
            StatusMessage {
                kind: StatusKind::Failure,
                text: format!("Submit failed: {detail}"),
            }
        });
    }

    pub fn focus(&self) -> PanelFocus {
        self.focus
    }

    pub fn focus_editor(&mut self) {
        self.focus = PanelFocus::Editor;
    }

    pub fn focus_view(&mut self) {
        self.focus = PanelFocus::View;
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind,
            text: text.into(),
        });
    }

    pub fn apply_account(&mut self, sequence_number: String) {
        self.sequence_number = Some(sequence_number);
    }

    pub fn apply_modules(&mut self, modules: Vec<ModuleInfo>) {
        self.modules = modules;
    }

    /// Stores the fetched resources and re-derives the draft from the
    /// MessageHolder resource, overwriting any local edits. Acceptable
    /// because resources are fetched exactly once per address.
    pub fn apply_resources(&mut self, resources: Vec<ResourceRecord>) {
        self.resources = resources;
        let message = self
            .address
            .as_deref()
            .and_then(|address| chain::find_message(&self.resources, address))
            .unwrap_or("")
            .to_owned();
        self.draft.set_text(message);
    }
}
