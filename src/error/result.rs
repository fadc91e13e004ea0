//! Result alias and context helpers.

use super::FolioError;

pub type FolioResult<T> = Result<T, FolioError>;

/// Attach the name of the failing operation to an error.
pub trait ResultExt<T> {
    fn operation(self, operation: &str) -> FolioResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<FolioError>,
{
    fn operation(self, operation: &str) -> FolioResult<T> {
        self.map_err(|e| e.into().with_operation(operation))
    }
}
