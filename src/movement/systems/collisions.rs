//! Movement domain: ground, one-way platform and ceiling probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ContactInfo, ContactSet, GameLayer, Player, PlayerController, player_collision_layers,
};

/// Probe rays start this far inside the collider so a resting contact is not
/// missed when the solver leaves the feet a hair below the surface.
const PROBE_SKIN: f32 = 2.0;

/// Frames of fall distance the one-way landing probe looks ahead, so a fast
/// fall re-enables platform collision before the feet reach the surface.
const LANDING_LOOKAHEAD_FRAMES: f32 = 2.0;

pub(crate) fn probe_contacts(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &PlayerController, &mut ContactSet), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let one_way_filter = SpatialQueryFilter::from_mask(GameLayer::OneWayPlatform);

    for (transform, collider, controller, mut contacts) in &mut query {
        let half_extents = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => Vec2::new(12.0, 24.0),
        };

        let center = transform.translation.truncate();
        let feet = center - Vec2::new(0.0, half_extents.y - PROBE_SKIN);
        let head = center + Vec2::new(0.0, half_extents.y - PROBE_SKIN);
        let reach = PROBE_SKIN + controller.tuning().ground_probe_distance;
        let fall_step = (-controller.velocity().y).max(0.0) * time.delta_secs();
        let landing_reach = reach + fall_step * LANDING_LOOKAHEAD_FRAMES;

        let cast =
            |origin: Vec2, direction: Dir2, max_distance: f32, filter: &SpatialQueryFilter| {
                spatial_query
                    .cast_ray(origin, direction, max_distance, true, filter)
                    .map(|hit| ContactInfo {
                        entity: Some(hit.entity),
                        point: origin + *direction * hit.distance,
                        normal: hit.normal,
                    })
            };

        // Inset by the skin so a body resting on a platform is not inside it
        let inset = Collider::rectangle(
            2.0 * (half_extents.x - PROBE_SKIN).max(PROBE_SKIN),
            2.0 * (half_extents.y - PROBE_SKIN).max(PROBE_SKIN),
        );
        let one_way_overlap = !spatial_query
            .shape_intersections(&inset, center, 0.0, &one_way_filter)
            .is_empty();

        // A platform the feet are already buried in is being passed through
        let below_feet = |info: &ContactInfo| info.point.y < feet.y;

        *contacts = ContactSet {
            solid_ground: cast(feet, Dir2::NEG_Y, reach, &ground_filter),
            one_way_ground: cast(feet, Dir2::NEG_Y, reach, &one_way_filter).filter(below_feet),
            ceiling: cast(head, Dir2::Y, reach, &ground_filter),
            one_way_beneath: cast(feet, Dir2::NEG_Y, landing_reach, &one_way_filter)
                .filter(below_feet)
                .is_some(),
            one_way_overlap,
        };
    }
}

/// Let the player pass through one-way platforms unless landing on one from above.
pub(crate) fn update_one_way_collision(
    mut query: Query<(&PlayerController, &mut CollisionLayers), With<Player>>,
) {
    for (controller, mut layers) in &mut query {
        *layers = player_collision_layers(controller.collides_with_one_way());
    }
}
