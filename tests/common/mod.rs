//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! let (mut app, opener) = common::test_app();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use folio::app::App;
use folio::config::AppConfig;
use folio::ui;
use ratatui::{backend::TestBackend, Terminal};

/// App without animation, wired to a recording opener.
pub fn test_app_with(opener: RecordingOpener) -> (App, RecordingOpener) {
    let config = AppConfig::new().with_animations(false);
    let app = App::with_opener(config, Box::new(opener.clone()));
    (app, opener)
}

pub fn test_app() -> (App, RecordingOpener) {
    test_app_with(RecordingOpener::new())
}

/// Draw one frame and return the buffer as one string per row.
pub fn draw(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect()
}
