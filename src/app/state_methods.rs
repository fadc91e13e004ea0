//! Tick, entrance clock, notices and terminal size.

use super::{App, Notice};
use crate::traits::{open_resource, OpenAction};
use crate::ui::page::entrance_total_ms;

impl App {
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    /// Advance one tick: expire the notice and keep redrawing while sections
    /// are still entering.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self
            .notice
            .as_ref()
            .is_some_and(|n| self.tick_count >= n.expires_at)
        {
            self.notice = None;
            self.mark_dirty();
        }

        if self.is_animating() {
            self.mark_dirty();
        }
    }

    /// Milliseconds since mount for the entrance; saturated when disabled.
    pub fn elapsed_ms(&self) -> u64 {
        if !self.config.animations {
            return u64::MAX;
        }
        self.tick_count
            .saturating_sub(self.mount_tick)
            .saturating_mul(self.config.tick_ms)
    }

    /// Whether some section has not fully entered yet. The last frame of the
    /// entrance is one tick past the end so it draws settled.
    pub fn is_animating(&self) -> bool {
        self.config.animations
            && self
                .tick_count
                .saturating_sub(self.mount_tick)
                .saturating_sub(1)
                .saturating_mul(self.config.tick_ms)
                <= entrance_total_ms()
    }

    pub fn show_notice(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(%message, "notice");
        self.notice = Some(Notice {
            message,
            expires_at: self.tick_count.saturating_add(self.config.notice_ticks),
        });
        self.mark_dirty();
    }

    /// Returns true if a notice was showing.
    pub fn dismiss_notice(&mut self) -> bool {
        let had_notice = self.notice.take().is_some();
        if had_notice {
            self.mark_dirty();
        }
        had_notice
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Reset every section to its freshly mounted state and replay the entrance.
    pub fn remount(&mut self) {
        tracing::debug!("remount");
        self.state.remount();
        self.mount_tick = self.tick_count;
        self.scroll = 0;
        self.clear_focus();
        self.mark_dirty();
    }

    /// Hand a URI to the opener; a failure becomes a notice, never an error.
    pub fn open_link(&mut self, uri: &str, action: OpenAction) {
        if let Err(err) = open_resource(self.opener.as_ref(), uri, action) {
            self.show_notice(err.user_message());
        }
    }
}
