//! Host environment collaborators
//!
//! Everything the controller needs from the embedding application that is
//! not the surface itself: surface creation, the auxiliary input toggle and
//! native activity launch.

use goto_core::prelude::*;

use crate::surface::{Surface, SurfaceConfig};

/// Services provided by the embedding application.
#[cfg_attr(test, mockall::automock)]
pub trait Host {
    /// Create a new surface. Failures follow the host's own error model.
    fn create_surface(&mut self, config: &SurfaceConfig) -> Result<Box<dyn Surface>>;

    /// Hide or restore the auxiliary on-screen input layer.
    fn set_auxiliary_input_hidden(&mut self, hidden: bool);

    /// Ask the platform to open a native activity by name. Fire-and-forget.
    fn open_platform_activity(&mut self, name: &str);
}
