//! Panic reporting while the TUI owns the terminal.
//!
//! A panic inside the event loop would otherwise print onto the alternate
//! screen and vanish with it. The hook puts the tty back first, records the
//! panic in the log file, then hands over to the previous hook.

use std::any::Any;
use std::panic::{self, Location};

use super::setup::emergency_restore;

/// Chain terminal restoration and logging in front of the current panic hook.
///
/// Call after `color_eyre::install()` so its report hook is the one chained.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        tracing::error!(panic = %panic_summary(info.payload(), info.location()), "panicked");
        previous(info);
    }));
}

/// `message at file:line`, or just the message when the location is unknown.
fn panic_summary(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload");

    match location {
        Some(location) => format!("{message} at {}:{}", location.file(), location.line()),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_str_and_string_payloads() {
        let payload: Box<dyn Any + Send> = Box::new("index out of range");
        assert_eq!(panic_summary(payload.as_ref(), None), "index out of range");

        let payload: Box<dyn Any + Send> = Box::new(String::from("bad row 7"));
        let location = Location::caller();
        let summary = panic_summary(payload.as_ref(), Some(location));
        assert!(summary.starts_with("bad row 7 at "));
        assert!(summary.ends_with(&format!("panic.rs:{}", location.line())));
    }

    #[test]
    fn test_summary_of_opaque_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_summary(payload.as_ref(), None), "non-string panic payload");
    }

    #[test]
    fn test_setup_panic_hook_installs() {
        setup_panic_hook();
        let _ = panic::take_hook();
    }
}
