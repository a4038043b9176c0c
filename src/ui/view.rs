use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::panel_state::{PanelFocus, PanelState, StatusKind};

use super::editor::render_editor;
use super::styles;

/// Which body the panel shows, decided by the module presence gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyBranch {
    Editor,
    PublishInstructions,
}

pub fn render(frame: &mut Frame<'_>, state: &PanelState) {
    let [header_area, body_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let header = Paragraph::new(header_line(state))
        .block(Block::default().title("Account").borders(Borders::ALL));
    frame.render_widget(header, header_area);

    match body_branch(state) {
        BodyBranch::Editor => {
            let [editor_area, hint_area] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(1)])
                .areas(body_area);

            render_editor(
                frame,
                editor_area,
                state.draft(),
                state.focus() == PanelFocus::Editor,
            );

            let hint = Paragraph::new(Span::styled(focus_hint(state), styles::hint_style()));
            frame.render_widget(hint, hint_area);
        }
        BodyBranch::PublishInstructions => {
            let instructions = Paragraph::new(publish_instructions(state.address()))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .title("Module not published")
                        .borders(Borders::ALL),
                );
            frame.render_widget(instructions, body_area);
        }
    }

    let status = Paragraph::new(status_line(state));
    frame.render_widget(status, status_area);
}

/// Shows the editor only when the account has the message module published.
pub fn body_branch(state: &PanelState) -> BodyBranch {
    if state.has_message_module() {
        BodyBranch::Editor
    } else {
        BodyBranch::PublishInstructions
    }
}

fn header_line(state: &PanelState) -> Line<'static> {
    let address = state.address().unwrap_or("<no wallet session>").to_owned();
    let sequence = state
        .sequence_number()
        .map(|sequence_number| format!("  seq: {sequence_number}"))
        .unwrap_or_default();

    Line::from(vec![
        Span::styled(address, styles::address_style()),
        Span::styled(sequence, styles::sequence_style()),
    ])
}

fn focus_hint(state: &PanelState) -> &'static str {
    match state.focus() {
        PanelFocus::View => "i: edit | Enter: submit | q: quit",
        PanelFocus::Editor => "Esc: done | Enter: submit | type your message",
    }
}

/// Instructions shown when the account has no message module yet.
fn publish_instructions(address: Option<&str>) -> String {
    let address = address.unwrap_or("<address>");
    format!(
        "The account has no message module published.\n\n\
         Publish it with the CLI, then restart:\n\n\
         aptos move publish --package-dir /path/to/hello_blockchain/ \
         --named-addresses HelloBlockchain={address}"
    )
}

fn status_line(state: &PanelState) -> Line<'static> {
    if state.is_submitting() {
        return Line::from(Span::styled(
            "Submitting transaction...".to_owned(),
            styles::hint_style(),
        ));
    }

    if let Some(status) = state.status() {
        let style = match status.kind {
            StatusKind::Success => styles::status_ok_style(),
            StatusKind::Failure => styles::status_err_style(),
        };
        return Line::from(Span::styled(status.text.clone(), style));
    }

    let session = if state.address().is_some() {
        "wallet: connected"
    } else {
        "wallet: no session"
    };
    Line::from(Span::styled(session.to_owned(), styles::hint_style()))
}
