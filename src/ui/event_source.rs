use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Translates crossterm key presses into app events.
///
/// Only Ctrl-C quits unconditionally; plain characters (including 'q') are
/// forwarded as input so they remain typable in the editor. The orchestrator
/// decides what each key means in the current focus.
#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            if key.code == KeyCode::Char('c') && ctrl {
                return Ok(Some(AppEvent::QuitRequested));
            }

            let input = match key.code {
                KeyCode::Char(ch) => Some(KeyInput::new(ch.to_string(), ctrl)),
                KeyCode::Enter => Some(KeyInput::new("enter", ctrl)),
                KeyCode::Esc => Some(KeyInput::new("esc", ctrl)),
                KeyCode::Backspace => Some(KeyInput::new("backspace", ctrl)),
                KeyCode::Delete => Some(KeyInput::new("delete", ctrl)),
                KeyCode::Left => Some(KeyInput::new("left", ctrl)),
                KeyCode::Right => Some(KeyInput::new("right", ctrl)),
                KeyCode::Home => Some(KeyInput::new("home", ctrl)),
                KeyCode::End => Some(KeyInput::new("end", ctrl)),
                _ => None,
            };

            return Ok(input.map(AppEvent::InputKey));
        }

        Ok(None)
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}
