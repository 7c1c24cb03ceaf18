//! goto-app - Dialog state machine and orchestration for the goto dialog
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! dialog's presentation state, the [`DialogController`] that applies the
//! resulting side effects, the surface/host contracts, and configuration
//! loading.

pub mod config;
pub mod controller;
pub mod handler;
pub mod host;
pub mod message;
pub mod observer;
pub mod state;
pub mod surface;

// Re-export primary types
pub use config::Settings;
pub use controller::DialogController;
pub use handler::{update, UpdateAction, UpdateResult};
pub use host::Host;
pub use message::Message;
pub use observer::VisibilityObserver;
pub use state::{DialogPhase, DialogState};
pub use surface::{InboundSender, Surface, SurfaceConfig};
