//! Terminal event handling for the App.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::navigation::WHEEL_STEP;
use super::App;
use crate::ui::interaction::handle_click_action;

impl App {
    /// Dispatch one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Resize(width, height) => self.update_terminal_dimensions(width, height),
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            // Ignore other events (focus, paste, key release)
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc => {
                if !self.dismiss_notice() {
                    self.quit();
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.focus_next(),
            KeyCode::Char('k') | KeyCode::Up => self.focus_prev(),
            KeyCode::BackTab => self.prev_section(),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.prev_section(),
            KeyCode::Tab => self.next_section(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            KeyCode::Char('r') => self.remount(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            // Left click: the topmost hit area under the pointer wins
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    self.focus_action(action);
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_registry.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP as isize),
            MouseEventKind::ScrollUp => self.scroll_by(-(WHEEL_STEP as isize)),
            _ => {}
        }
    }
}
