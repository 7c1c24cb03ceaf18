//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::DialogState;

use super::{lifecycle, surface, UpdateResult};

/// Process a message and update state.
/// Returns the ordered side effects for the controller to perform.
pub fn update(state: &mut DialogState, message: Message) -> UpdateResult {
    let result = match message {
        Message::Init => lifecycle::handle_init(state),
        Message::SurfaceCreated => lifecycle::handle_surface_created(state),
        Message::Show => lifecycle::handle_show(state),
        Message::Hide => lifecycle::handle_hide(state),
        Message::Destroy => lifecycle::handle_destroy(state),
        Message::Surface(msg) => surface::handle_surface_message(state, msg),
    };

    debug_assert!(state.invariants_hold(), "dialog invariants broken: {state:?}");
    result
}
