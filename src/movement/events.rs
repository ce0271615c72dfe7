//! Movement domain: contact notifications for other systems.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::ContactInfo;

/// Emitted on the tick a character goes from airborne to grounded
#[derive(Debug, Clone)]
pub struct GroundEnteredEvent {
    pub entity: Entity,
    pub contact: ContactInfo,
}

impl Message for GroundEnteredEvent {}

/// Emitted on the tick a character's head first touches a ceiling
#[derive(Debug, Clone)]
pub struct CeilingHitEvent {
    pub entity: Entity,
    pub contact: ContactInfo,
}

impl Message for CeilingHitEvent {}
