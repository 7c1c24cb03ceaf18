//! Handler module - TEA update function and message handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `lifecycle`: init/show/hide/destroy transitions
//! - `surface`: Handlers for messages coming from the surface

pub(crate) mod lifecycle;
pub(crate) mod surface;
pub(crate) mod update;


// Re-export main entry point
pub use update::update;

/// Side effects the controller performs after an update, in order
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Hide (`true`) or restore (`false`) the auxiliary input layer
    SetAuxiliaryInputHidden(bool),

    /// Register the inbound sink with the surface
    ConnectInbound,

    /// Unregister the inbound sink from the surface
    DisconnectInbound,

    /// Toggle the surface's own visibility
    SetSurfaceVisible(bool),

    /// Close the surface and drop the controller's reference to it
    CloseSurface,

    /// Tell the visibility observer, if any, what the surface reported
    NotifyVisibilityChanged(bool),

    /// Run the owner's `on_hidden` hook
    InvokeOnHidden,

    /// Ask the host to open the configured native activity
    OpenPlatformActivity,

    /// Log a message the dispatcher does not understand
    ReportUnrecognized(serde_json::Value),
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq)]
pub struct UpdateResult {
    /// Actions for the controller to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self { actions }
    }

    /// Append a follow-up action
    pub fn then(mut self, action: UpdateAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
