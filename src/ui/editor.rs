//! Message editor rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::draft::DraftState;

use super::styles;

/// Placeholder text shown when the editor is not focused and empty.
const PLACEHOLDER_TEXT: &str = "Press 'i' to edit the message...";

/// Prompt symbol shown before the draft text.
const PROMPT_SYMBOL: &str = "> ";

/// Renders the message editor.
pub fn render_editor(frame: &mut Frame<'_>, area: Rect, draft: &DraftState, focused: bool) {
    let border_style = if focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let line = build_editor_line(draft, focused);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title("Message")
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(paragraph, area);

    if focused {
        // Cursor offset is measured in display columns, not characters.
        let text_before_cursor: String = draft
            .text()
            .chars()
            .take(draft.cursor_position())
            .collect();
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(text_before_cursor.width().min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Builds the line content for the editor.
fn build_editor_line(draft: &DraftState, focused: bool) -> Line<'static> {
    let prompt_style = styles::input_prompt_style();

    if !focused && draft.is_empty() {
        Line::from(vec![
            Span::styled(PROMPT_SYMBOL.to_owned(), prompt_style),
            Span::styled(
                PLACEHOLDER_TEXT.to_owned(),
                styles::input_placeholder_style(),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(PROMPT_SYMBOL.to_owned(), prompt_style),
            Span::styled(draft.text().to_owned(), styles::input_text_style()),
        ])
    }
}
