//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

/// Style for the account address in the header (bold, bright).
pub fn address_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the sequence number next to the address.
pub fn sequence_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for key hints in the status line.
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for a successful status message.
pub fn status_ok_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Style for a failed status message.
pub fn status_err_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Style for the editor prompt symbol.
pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Style for the editor text.
pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for the editor placeholder.
pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Border style for the focused panel.
pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Border style for unfocused panels.
pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_style_is_bold_white() {
        let style = address_style();
        assert_eq!(style.fg, Some(Color::White));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn status_styles_distinguish_outcomes() {
        assert_eq!(status_ok_style().fg, Some(Color::Green));
        assert_eq!(status_err_style().fg, Some(Color::Red));
    }

    #[test]
    fn active_border_differs_from_inactive() {
        assert_ne!(
            active_panel_border_style().fg,
            inactive_panel_border_style().fg
        );
    }
}
