//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the controller readout is visible
    pub show_info: bool,
    /// Whether ground and ceiling probes are drawn
    pub show_probes: bool,
}
