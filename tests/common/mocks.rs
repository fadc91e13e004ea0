//! Mock implementations of the library seams.

use std::io;
use std::sync::{Arc, Mutex};

use folio::traits::{ResourceOpener, SystemOpener};

/// Records every URI handed to it; optionally fails the hand-off.
#[derive(Clone, Default)]
pub struct RecordingOpener {
    pub opened: Arc<Mutex<Vec<String>>>,
    /// Fail `open` with an I/O error
    pub fail: bool,
    /// Claim no handler exists for any URI
    pub unsupported: bool,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn unsupported() -> Self {
        Self {
            unsupported: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl ResourceOpener for RecordingOpener {
    fn can_open(&self, uri: &str) -> bool {
        !self.unsupported && SystemOpener.can_open(uri)
    }

    fn open(&self, uri: &str) -> io::Result<()> {
        self.opened.lock().unwrap().push(uri.to_string());
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no browser"));
        }
        Ok(())
    }
}
