//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid surfaces: floors, walls, ceilings
    Ground,
    /// Platforms that only block from above
    OneWayPlatform,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for solid colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for one-way platform colliders
#[derive(Component, Debug)]
pub struct OneWayPlatform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Collision layers for the player given whether one-way platforms should block it.
pub fn player_collision_layers(collide_with_one_way: bool) -> CollisionLayers {
    if collide_with_one_way {
        CollisionLayers::new(
            GameLayer::Player,
            [GameLayer::Ground, GameLayer::OneWayPlatform],
        )
    } else {
        CollisionLayers::new(GameLayer::Player, [GameLayer::Ground])
    }
}
