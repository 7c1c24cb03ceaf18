//! Lifecycle transitions: init, show, hide, destroy

use tracing::{debug, warn};

use crate::state::DialogState;

use super::{UpdateAction, UpdateResult};

/// Tear down any surface still held so the next one starts clean.
pub fn handle_init(state: &mut DialogState) -> UpdateResult {
    if state.surface_present {
        warn!("init() called while a surface is still held; destroying it first");
        return handle_destroy(state);
    }
    UpdateResult::none()
}

pub fn handle_surface_created(state: &mut DialogState) -> UpdateResult {
    state.reset();
    state.surface_present = true;
    UpdateResult::none()
}

/// Show the dialog.
///
/// The input toggle runs even without a surface; `visible` only becomes true
/// when there is a surface to make visible.
pub fn handle_show(state: &mut DialogState) -> UpdateResult {
    if state.visible {
        return UpdateResult::none();
    }

    let mut result = UpdateResult::action(UpdateAction::SetAuxiliaryInputHidden(true));

    if !state.surface_present {
        debug!("show() without a surface; only the input layer was hidden");
        return result;
    }

    if !state.listening {
        result = result.then(UpdateAction::ConnectInbound);
        state.listening = true;
    }
    state.visible = true;
    result.then(UpdateAction::SetSurfaceVisible(true))
}

/// Hide the dialog.
///
/// The input restore always runs so it pairs with any earlier `show()`,
/// including one issued before a surface existed.
pub fn handle_hide(state: &mut DialogState) -> UpdateResult {
    let mut result = UpdateResult::action(UpdateAction::SetAuxiliaryInputHidden(false));

    if !state.visible {
        return result;
    }

    if state.listening {
        result = result.then(UpdateAction::DisconnectInbound);
        state.listening = false;
    }
    state.visible = false;
    result.then(UpdateAction::SetSurfaceVisible(false))
}

/// Release the surface. Idempotent.
pub fn handle_destroy(state: &mut DialogState) -> UpdateResult {
    let mut result = UpdateResult::none();

    if state.surface_present {
        if state.listening {
            result = result.then(UpdateAction::DisconnectInbound);
        }
        result = result.then(UpdateAction::CloseSurface);
    }

    state.reset();
    result
}
