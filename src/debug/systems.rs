//! Debug domain: hotkeys, readout and probe drawing.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{CeilingHitEvent, ContactSet, GroundEnteredEvent, Player, PlayerController};

/// F1 or backtick toggles the readout, F2 the probe gizmos, F3 dumps tuning
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    player_query: Query<&PlayerController, With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Controller readout {}", on_off(debug_state.show_info));
    }

    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_probes = !debug_state.show_probes;
        info!("[DEBUG] Probe gizmos {}", on_off(debug_state.show_probes));
    }

    if keyboard.just_pressed(KeyCode::F3) {
        for controller in &player_query {
            match serde_json::to_string_pretty(controller.tuning()) {
                Ok(json) => info!("[DEBUG] Active movement tuning:\n{}", json),
                Err(e) => warn!("[DEBUG] Could not serialize tuning: {}", e),
            }
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

/// Update the debug info overlay with current controller state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &PlayerController), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, controller)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        let velocity = controller.velocity();
        let tuning = controller.tuning();
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nPhase: {:?}\nGround: {:?} (one-way solid: {})\nJumps: {}/{}\nBuffered: {} ({:.0} ms window)\nFacing: {:?}",
            pos.x,
            pos.y,
            velocity.x,
            velocity.y,
            controller.phase(),
            controller.ground_contact(),
            controller.collides_with_one_way(),
            controller.jumps_remaining(),
            controller.max_jumps(),
            controller.jump_buffered(),
            tuning.jump_buffer().window_secs(tuning.tick_rate_hz) * 1000.0,
            controller.facing(),
        );
    }
}

pub(crate) fn draw_probe_gizmos(
    debug_state: Res<DebugState>,
    mut gizmos: Gizmos,
    query: Query<(&Transform, &ContactSet, &PlayerController), With<Player>>,
) {
    if !debug_state.show_probes {
        return;
    }

    for (transform, contacts, controller) in &query {
        let center = transform.translation.truncate();
        for (contact, color) in [
            (contacts.solid_ground, Color::srgb(0.3, 0.9, 0.3)),
            (contacts.one_way_ground, Color::srgb(0.9, 0.7, 0.2)),
            (contacts.ceiling, Color::srgb(0.9, 0.3, 0.3)),
        ] {
            if let Some(info) = contact {
                gizmos.line_2d(center, info.point, color);
                gizmos.line_2d(info.point, info.point + info.normal * 12.0, color);
            }
        }

        let facing = Vec2::new(controller.facing().sign() * 20.0, 0.0);
        gizmos.line_2d(center, center + facing, Color::WHITE);
    }
}

/// Subscribes to the controller's contact messages and logs them.
pub(crate) fn log_contact_events(
    mut ground_events: MessageReader<GroundEnteredEvent>,
    mut ceiling_events: MessageReader<CeilingHitEvent>,
) {
    for event in ground_events.read() {
        debug!(
            "[DEBUG] {:?} landed at ({:.0}, {:.0})",
            event.entity, event.contact.point.x, event.contact.point.y
        );
    }
    for event in ceiling_events.read() {
        debug!("[DEBUG] {:?} hit a ceiling", event.entity);
    }
}
