//! Movement domain: player bootstrap from loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactSet, MovementTuning, Player, PlayerController, player_collision_layers};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player once tuning is available.
/// Setup failures are reported here, once, and leave the world without a player.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Option<Res<MovementTuning>>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let Some(tuning) = tuning else {
        error!("No usable MovementTuning; player not spawned");
        return;
    };

    let controller = match PlayerController::new((*tuning).clone()) {
        Ok(controller) => controller,
        Err(errors) => {
            for err in &errors {
                error!("Rejected movement tuning: {}", err);
            }
            error!("{} tuning error(s); player not spawned", errors.len());
            return;
        }
    };

    let layers = player_collision_layers(controller.collides_with_one_way());

    info!(
        "Spawning player: run_speed={}, max_jumps={}, reach={:.0}",
        tuning.run_speed,
        tuning.max_jumps,
        tuning.max_reachable_height()
    );

    commands.spawn((
        (Player, controller, ContactSet::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, -120.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is applied by the controller
            Friction::new(0.0),
            layers,
        ),
    ));
}
