//! Inbound surface message dispatch

use goto_core::SurfaceMessage;

use crate::state::DialogState;

use super::{lifecycle, UpdateAction, UpdateResult};

/// Dispatch one message received from the surface.
pub fn handle_surface_message(state: &mut DialogState, msg: SurfaceMessage) -> UpdateResult {
    match msg {
        // Observer only; our own `visible` flag stays authoritative.
        SurfaceMessage::ShownChanged { shown } => {
            UpdateResult::action(UpdateAction::NotifyVisibilityChanged(shown))
        }

        SurfaceMessage::Hide => lifecycle::handle_hide(state).then(UpdateAction::InvokeOnHidden),

        SurfaceMessage::OpenPlatformActivity => {
            UpdateResult::action(UpdateAction::OpenPlatformActivity)
        }

        SurfaceMessage::Unrecognized(raw) => {
            UpdateResult::action(UpdateAction::ReportUnrecognized(raw))
        }
    }
}
