//! # folio-core - Core Domain Types
//!
//! Foundation crate for folio. Provides section identifiers, the theme enum,
//! static portfolio content, the section registry, error handling and logging
//! setup.
//!
//! This crate has **zero internal dependencies** and no terminal dependency, so
//! everything here can be consumed by any display layer.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`SectionId`] - Closed set of the six section identifiers
//! - [`Theme`] - Light/dark presentation variant
//! - [`Icon`] - Glyph-agnostic icon slots
//!
//! ### Registry (`registry`)
//! - [`SectionRegistry`] - Ordered section descriptors with body builders
//! - [`SectionBody`], [`BodyNode`], [`Card`] - Host-agnostic visual tree
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum for terminal, config and opener failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Logs an error with context while propagating it
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod registry;
pub mod types;

/// Prelude for common imports used throughout all folio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use registry::{BodyNode, Card, SectionBody, SectionDescriptor, SectionRegistry};
pub use types::{Icon, SectionId, Theme, UnknownSection};
