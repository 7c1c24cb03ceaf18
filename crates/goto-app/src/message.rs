//! Message types for the dialog state machine (TEA pattern)

use goto_core::SurfaceMessage;

/// Everything that can drive the dialog state machine
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Lifecycle (public controller API)
    // ─────────────────────────────────────────────────────────
    /// Prepare for a new surface, tearing down any previous one
    Init,

    /// The host created the surface requested by `Init`
    SurfaceCreated,

    Show,

    Hide,

    Destroy,

    // ─────────────────────────────────────────────────────────
    // Inbound (from the surface)
    // ─────────────────────────────────────────────────────────
    /// A message delivered through the inbound sink
    Surface(SurfaceMessage),
}

impl From<SurfaceMessage> for Message {
    fn from(msg: SurfaceMessage) -> Self {
        Message::Surface(msg)
    }
}
