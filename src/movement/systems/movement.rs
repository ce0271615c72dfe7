//! Movement domain: controller tick and velocity hand-off to physics.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    CeilingHitEvent, ContactEvent, ContactSet, GroundEnteredEvent, MovementInput, Player,
    PlayerController,
};

/// Pull the velocity avian resolved during the last physics step.
pub(crate) fn sync_from_physics(
    mut query: Query<(&LinearVelocity, &mut PlayerController), With<Player>>,
) {
    for (velocity, mut controller) in &mut query {
        controller.sync_velocity(velocity.0);
    }
}

pub(crate) fn tick_controllers(
    input: Res<MovementInput>,
    mut ground_events: MessageWriter<GroundEnteredEvent>,
    mut ceiling_events: MessageWriter<CeilingHitEvent>,
    mut query: Query<(Entity, &ContactSet, &mut PlayerController), With<Player>>,
) {
    for (entity, contacts, mut controller) in &mut query {
        let report = controller.tick(&input, contacts);

        for event in report.events {
            match event {
                ContactEvent::GroundEntered(contact) => {
                    ground_events.write(GroundEnteredEvent { entity, contact });
                }
                ContactEvent::CeilingHit(contact) => {
                    ceiling_events.write(CeilingHitEvent { entity, contact });
                }
            }
        }
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    mut query: Query<&mut PlayerController, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut controller in &mut query {
        controller.apply_gravity(dt);
    }
}

/// Hand the controller's velocity to avian for integration.
pub(crate) fn write_to_physics(
    mut query: Query<(&PlayerController, &mut LinearVelocity), With<Player>>,
) {
    for (controller, mut velocity) in &mut query {
        velocity.0 = controller.velocity();
    }
}
