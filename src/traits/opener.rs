//! Open-external-resource capability.
//!
//! The portfolio only ever hands URIs off; it never waits for or observes
//! what the platform does with them. Tests substitute a recording opener.

use crate::error::OpenError;

/// What the user was trying to do, for failure notices and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAction {
    Call,
    Email,
    Profile,
    SourceCode,
    LiveDemo,
    Publication,
}

impl OpenAction {
    pub fn failure_message(&self) -> &'static str {
        match self {
            OpenAction::Call => "Failed to start the call",
            OpenAction::Email => "Failed to open the mail client",
            OpenAction::Profile => "Failed to open the profile",
            OpenAction::SourceCode => "Failed to open the source code",
            OpenAction::LiveDemo => "Failed to open the live demo",
            OpenAction::Publication => "Failed to open the publication",
        }
    }
}

/// URI schemes the system opener will hand off.
pub const SUPPORTED_SCHEMES: &[&str] = &["tel", "mailto", "http", "https"];

/// Platform hand-off for URIs.
pub trait ResourceOpener: Send + Sync {
    /// Whether a handler exists for this URI.
    fn can_open(&self, uri: &str) -> bool;

    /// Hand the URI to its handler without waiting for it.
    fn open(&self, uri: &str) -> std::io::Result<()>;
}

/// Ask, then open; the two failure modes map to the two `OpenError` variants.
pub fn open_resource(
    opener: &dyn ResourceOpener,
    uri: &str,
    action: OpenAction,
) -> Result<(), OpenError> {
    if !opener.can_open(uri) {
        tracing::warn!(uri, ?action, "no handler for uri");
        return Err(OpenError::Unsupported {
            uri: uri.to_string(),
        });
    }
    opener.open(uri).map_err(|source| {
        tracing::warn!(uri, ?action, error = %source, "open failed");
        OpenError::Failed {
            uri: uri.to_string(),
            action,
            source,
        }
    })?;
    tracing::info!(uri, ?action, "opened external resource");
    Ok(())
}

/// Opener backed by the `open` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl ResourceOpener for SystemOpener {
    fn can_open(&self, uri: &str) -> bool {
        uri.split_once(':')
            .map(|(scheme, rest)| {
                !rest.is_empty() && SUPPORTED_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str())
            })
            .unwrap_or(false)
    }

    fn open(&self, uri: &str) -> std::io::Result<()> {
        open::that_detached(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeOpener {
        supported: bool,
        fail: bool,
        opened: Mutex<Vec<String>>,
    }

    impl ResourceOpener for FakeOpener {
        fn can_open(&self, _uri: &str) -> bool {
            self.supported
        }

        fn open(&self, uri: &str) -> std::io::Result<()> {
            if self.fail {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "launcher crashed"));
            }
            self.opened.lock().unwrap().push(uri.to_string());
            Ok(())
        }
    }

    fn fake(supported: bool, fail: bool) -> FakeOpener {
        FakeOpener {
            supported,
            fail,
            opened: Mutex::new(Vec::new()),
        }
    }

    #[test]
    fn test_system_opener_schemes() {
        let opener = SystemOpener;
        assert!(opener.can_open("tel:+919325309121"));
        assert!(opener.can_open("mailto:someone@example.com"));
        assert!(opener.can_open("https://github.com"));
        assert!(opener.can_open("HTTPS://github.com"));
        assert!(!opener.can_open("ftp://example.com"));
        assert!(!opener.can_open("not a uri"));
        assert!(!opener.can_open("tel:"));
    }

    #[test]
    fn test_open_resource_success() {
        let opener = fake(true, false);
        open_resource(&opener, "https://example.com", OpenAction::LiveDemo).unwrap();
        assert_eq!(opener.opened.lock().unwrap().as_slice(), ["https://example.com"]);
    }

    #[test]
    fn test_open_resource_unsupported() {
        let opener = fake(false, false);
        let err = open_resource(&opener, "x:y", OpenAction::Publication).unwrap_err();
        assert!(matches!(err, OpenError::Unsupported { .. }));
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn test_open_resource_failure_names_action() {
        let opener = fake(true, true);
        let err = open_resource(&opener, "https://example.com", OpenAction::Publication).unwrap_err();
        assert_eq!(err.user_message(), "Failed to open the publication");
    }
}
