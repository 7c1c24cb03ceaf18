//! Contract for the host-provided dialog surface
//!
//! The controller never renders anything. It only drives a [`Surface`] that
//! the host created from a [`SurfaceConfig`].

use goto_core::{Position, Size, SurfaceMessage};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Sending half handed to a surface while the controller listens to it
pub type InboundSender = mpsc::UnboundedSender<SurfaceMessage>;

/// Receiving half kept by the controller
pub type InboundReceiver = mpsc::UnboundedReceiver<SurfaceMessage>;

/// Content shown by the goto dialog surface
pub const DEFAULT_SURFACE_CONTENT: &str = "AddressBarDialog.qml";

/// Parameters used to create a surface
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SurfaceConfig {
    /// Reference to the content the host loads into the surface
    #[serde(default = "default_content")]
    pub content: String,

    /// Whether the surface starts visible
    #[serde(default)]
    pub initial_visible: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            content: default_content(),
            initial_visible: false,
        }
    }
}

fn default_content() -> String {
    DEFAULT_SURFACE_CONTENT.to_string()
}

/// A visible/invisible panel owned by the host runtime.
///
/// All calls happen on the host's UI thread.
#[cfg_attr(test, mockall::automock)]
pub trait Surface {
    fn set_visible(&mut self, visible: bool);

    /// Close and dispose the surface. No other call follows.
    fn close(&mut self);

    fn size(&self) -> Size;

    /// Current position. Only meaningful while the surface is visible.
    fn position(&self) -> Position;

    /// Start delivering inbound messages into `sink`.
    ///
    /// The surface holds at most one sink; connecting replaces it.
    fn connect_inbound(&mut self, sink: InboundSender);

    /// Stop delivering inbound messages and drop the sink.
    fn disconnect_inbound(&mut self);

    /// Forward an outbound record verbatim. Fire-and-forget.
    fn send(&mut self, message: serde_json::Value);
}
