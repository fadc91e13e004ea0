//! Trait seams to the host platform.
//!
//! - [`ResourceOpener`] - hand a URI (tel:, mailto:, https:) to the platform

pub mod opener;

pub use opener::{open_resource, OpenAction, ResourceOpener, SystemOpener, SUPPORTED_SCHEMES};
