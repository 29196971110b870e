use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, OutputMode};
use super::mouse_events;
use crate::listeners::GlobalEvent;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Mouse(mouse_event) => mouse_events::handle_mouse_event(self, mouse_event),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Release => {
                self.registry.dispatch(&GlobalEvent::KeyUp(key.code));
            }
            KeyEventKind::Press => {
                // Without release reporting a press is the closest thing to a key-up
                if !self.key_release_events {
                    self.registry.dispatch(&GlobalEvent::KeyUp(key.code));
                }
                self.handle_global_keys(key);
            }
            KeyEventKind::Repeat => {}
        }
    }

    fn handle_global_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                self.output_mode = Some(OutputMode::Selections);
                self.should_quit = true;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
