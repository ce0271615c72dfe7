//! Debug tooling for tuning the controller (dev-tools feature).
//!
//! - F1 / backtick: controller state readout
//! - F2: ground, one-way and ceiling probe gizmos
//! - F3: log the active tuning as JSON

mod state;
mod systems;
mod ui;

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::systems::{
    draw_probe_gizmos, handle_debug_hotkeys, log_contact_events, update_debug_info_overlay,
};
use crate::movement::MovementSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                handle_debug_hotkeys,
                update_debug_info_overlay,
                draw_probe_gizmos,
                log_contact_events,
            )
                .after(MovementSet::Logic),
        );
    }
}
