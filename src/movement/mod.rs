//! Movement domain: character controller state machine and plugin wiring.

mod body;
mod bootstrap;
mod components;
mod controller;
mod events;
mod jumper;
mod level;
mod resources;
mod runner;
mod systems;
mod timer;

pub use body::{
    Actor, CharacterBody, ContactEvent, ContactInfo, ContactSet, GroundContact, VelocitySink,
};
pub use components::{Facing, GameLayer, Ground, OneWayPlatform, Player, player_collision_layers};
pub use controller::{JumpAction, PlayerController, TickReport};
pub use events::{CeilingHitEvent, GroundEnteredEvent};
pub use jumper::{JumpPhase, Jumper};
pub use resources::{MovementInput, MovementTuning};
pub use runner::Runner;
pub use timer::FrameTimer;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::level::spawn_test_room;
use crate::movement::systems::{
    apply_gravity, probe_contacts, read_input, sync_from_physics, tick_controllers,
    update_one_way_collision, write_to_physics,
};

/// Ordering of the per-frame movement pipeline.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    Input,
    Logic,
    Handoff,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<GroundEnteredEvent>()
            .add_message::<CeilingHitEvent>()
            .configure_sets(
                Update,
                (MovementSet::Input, MovementSet::Logic, MovementSet::Handoff).chain(),
            )
            .add_systems(Startup, spawn_test_room)
            // Tuning is inserted by the content loader during Startup
            .add_systems(PostStartup, spawn_player)
            .add_systems(Update, read_input.in_set(MovementSet::Input))
            .add_systems(
                Update,
                (sync_from_physics, probe_contacts, tick_controllers, apply_gravity)
                    .chain()
                    .in_set(MovementSet::Logic),
            )
            .add_systems(
                Update,
                (write_to_physics, update_one_way_collision)
                    .chain()
                    .in_set(MovementSet::Handoff),
            );
    }
}
