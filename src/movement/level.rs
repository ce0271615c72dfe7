//! Movement domain: demo level with solid blocks and one-way platforms.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, OneWayPlatform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Solid,
    OneWay,
}

/// A static rectangle in the demo level.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub kind: BlockKind,
    pub center: Vec2,
    pub size: Vec2,
}

impl Block {
    const fn solid(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            kind: BlockKind::Solid,
            center: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    const fn one_way(x: f32, y: f32, w: f32) -> Self {
        Self {
            kind: BlockKind::OneWay,
            center: Vec2::new(x, y),
            size: Vec2::new(w, 12.0),
        }
    }
}

pub const TEST_ROOM: [Block; 8] = [
    // Floor and walls
    Block::solid(0.0, -200.0, 800.0, 40.0),
    Block::solid(-420.0, 50.0, 40.0, 500.0),
    Block::solid(420.0, 50.0, 40.0, 500.0),
    // Low ceiling for head bumps
    Block::solid(-250.0, 20.0, 180.0, 20.0),
    // One-way platforms
    Block::one_way(-250.0, -100.0, 150.0),
    Block::one_way(250.0, -80.0, 150.0),
    Block::one_way(250.0, 40.0, 150.0),
    Block::one_way(0.0, 150.0, 120.0),
];

pub(crate) fn spawn_test_room(mut commands: Commands) {
    for block in TEST_ROOM {
        spawn_block(&mut commands, block);
    }
}

fn spawn_block(commands: &mut Commands, block: Block) {
    let sprite = Sprite {
        color: match block.kind {
            BlockKind::Solid => Color::srgb(0.4, 0.5, 0.4),
            BlockKind::OneWay => Color::srgb(0.5, 0.4, 0.3),
        },
        custom_size: Some(block.size),
        ..default()
    };
    let physics = (
        Transform::from_translation(block.center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(block.size.x, block.size.y),
    );

    match block.kind {
        BlockKind::Solid => {
            commands.spawn((
                Ground,
                sprite,
                physics,
                CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
            ));
        }
        BlockKind::OneWay => {
            commands.spawn((
                OneWayPlatform,
                sprite,
                physics,
                CollisionLayers::new(GameLayer::OneWayPlatform, [GameLayer::Player]),
            ));
        }
    }
}
