//! Full-frame rendering against a TestBackend.

mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio::app::App;
use folio::config::AppConfig;
use folio::ui::interaction::ClickAction;
use folio::view_state::SectionId;

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_first_frame_shows_header() {
    let (mut app, _) = common::test_app();
    let rows = common::draw(&mut app, 100, 30);
    assert!(rows.iter().any(|r| r.contains("SUJAL KAMANNA")));
    assert!(rows.iter().any(|r| r.contains("── Profile Summary")));
}

#[test]
fn test_click_on_contact_link_opens_it() {
    let (mut app, opener) = common::test_app();
    common::draw(&mut app, 100, 30);

    let target = *app
        .targets
        .iter()
        .find(|t| matches!(t.action, ClickAction::OpenLink { .. }) && t.section == SectionId::Header)
        .unwrap();
    let ClickAction::OpenLink { uri, .. } = target.action else {
        unreachable!()
    };

    app.handle_mouse(click(target.col, target.row as u16));
    assert_eq!(opener.opened(), vec![uri.to_string()]);
    assert_eq!(app.focused_target().map(|t| t.action), Some(target.action));
}

#[test]
fn test_click_during_entrance_ignores_undrawn_links() {
    let opener = common::RecordingOpener::new();
    let mut app = App::with_opener(AppConfig::new(), Box::new(opener.clone()));
    let rows = common::draw(&mut app, 100, 30);
    assert!(rows[..29].iter().all(|r| r.trim().is_empty()));

    let target = *app
        .targets
        .iter()
        .find(|t| matches!(t.action, ClickAction::OpenLink { .. }) && t.section == SectionId::Header)
        .unwrap();
    app.handle_mouse(click(target.col, target.row as u16));
    assert!(opener.opened().is_empty());
    assert!(app.focus.is_none());

    // The header starts entering on the next tick
    app.tick();
    common::draw(&mut app, 100, 30);
    app.handle_mouse(click(target.col, target.row as u16));
    assert_eq!(opener.opened().len(), 1);
}

#[test]
fn test_click_outside_targets_is_ignored() {
    let (mut app, opener) = common::test_app();
    common::draw(&mut app, 100, 30);
    app.handle_mouse(click(99, 28));
    assert!(opener.opened().is_empty());
    assert!(app.focus.is_none());
}

#[test]
fn test_failed_open_notice_in_status_bar() {
    let (mut app, _) = common::test_app_with(common::RecordingOpener::failing());
    common::draw(&mut app, 100, 30);
    app.handle_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

    let rows = common::draw(&mut app, 100, 30);
    assert_eq!(rows[29].trim_start().chars().next(), Some('!'));
    assert!(rows[29].contains("Failed to start the call"));
}

#[test]
fn test_expanding_by_keyboard_grows_the_page() {
    let (mut app, _) = common::test_app();
    common::draw(&mut app, 100, 30);
    let before = app.page_height;

    for _ in 0..4 {
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    }
    assert_eq!(app.focused_target().unwrap().section, SectionId::Projects);
    app.handle_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));

    let rows = common::draw(&mut app, 100, 30);
    assert!(app.page_height > before);
    assert!(rows.iter().any(|r| r.starts_with("▶")));
    let page = app.layout(100, 29);
    assert!(page.text().iter().any(|r| r.contains("View Code")));
}

#[test]
fn test_narrow_terminal_uses_one_column() {
    let (mut app, _) = common::test_app();
    common::draw(&mut app, 60, 30);
    let narrow = app.page_height;
    common::draw(&mut app, 120, 30);
    assert!(narrow > app.page_height);
}

#[test]
fn test_end_scrolls_to_footer() {
    let (mut app, _) = common::test_app();
    common::draw(&mut app, 100, 30);
    app.handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
    let rows = common::draw(&mut app, 100, 30);
    assert_eq!(app.scroll, app.max_scroll);
    assert!(rows[28].contains("Built with ratatui"));
}
