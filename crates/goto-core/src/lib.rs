//! # goto-core - Core Domain Types
//!
//! Foundation crate for the goto dialog controller. Provides the surface
//! message envelope, geometry types, error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Messages (`message`)
//! - [`SurfaceMessage`] - Typed `{method, params}` record sent by the dialog surface
//! - [`parse_surface_message()`] - Parse one JSON line into a [`SurfaceMessage`]
//!
//! ### Geometry (`types`)
//! - [`Size`], [`Position`] - Two-component values reported by a surface
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use goto_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod message;
pub mod types;

/// Prelude for common imports used throughout all goto dialog crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use message::{
    parse_surface_message, SurfaceMessage, METHOD_HIDE, METHOD_OPEN_ACTIVITY,
    METHOD_SHOWN_CHANGED,
};
pub use types::{Position, Size};
