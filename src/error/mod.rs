//! Error types for folio.
//!
//! - [`OpenError`]: handing a URI to the host platform failed
//! - [`FolioError`]: everything else the library can report
//! - [`FolioResult`]: result alias over `FolioError`
//!
//! None of these are fatal to the TUI. Open failures become an ephemeral
//! notice; terminal and export failures surface from `main` through
//! `color_eyre`.

mod folio_error;
mod open;
mod result;

pub use folio_error::FolioError;
pub use open::OpenError;
pub use result::{FolioResult, ResultExt};
