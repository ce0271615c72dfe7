//! Movement domain: the character body that owns velocity and classifies contacts.

use bevy::prelude::*;

use crate::movement::FrameTimer;

/// Narrow write access to a body's velocity.
pub trait VelocitySink {
    fn velocity(&self) -> Vec2;
    fn set_velocity_x(&mut self, vx: f32);
    fn set_velocity_y(&mut self, vy: f32);
}

/// A body that can stand on one-way platforms and be told to drop through them.
pub trait CharacterBody: VelocitySink {
    fn is_on_ground_one_way(&self) -> bool;
    fn ignore_one_way_platforms(&mut self);
}

/// Where a probe touched a surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactInfo {
    pub entity: Option<Entity>,
    pub point: Vec2,
    pub normal: Vec2,
}

/// Raw contacts reported by the collision engine for one tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactSet {
    pub solid_ground: Option<ContactInfo>,
    pub one_way_ground: Option<ContactInfo>,
    pub ceiling: Option<ContactInfo>,
    /// A one-way platform top lies below the feet within landing reach
    pub one_way_beneath: bool,
    /// The body is inside a one-way platform
    pub one_way_overlap: bool,
}

impl ContactSet {
    pub fn airborne() -> Self {
        Self::default()
    }

    pub fn on_solid_ground() -> Self {
        Self {
            solid_ground: Some(ContactInfo {
                normal: Vec2::Y,
                ..default()
            }),
            ..default()
        }
    }

    pub fn on_one_way_ground() -> Self {
        Self {
            one_way_ground: Some(ContactInfo {
                normal: Vec2::Y,
                ..default()
            }),
            one_way_beneath: true,
            ..default()
        }
    }

    /// Inside a one-way platform, e.g. while dropping through it.
    pub fn inside_one_way() -> Self {
        Self {
            one_way_overlap: true,
            ..default()
        }
    }

    pub fn above_one_way() -> Self {
        Self {
            one_way_beneath: true,
            ..default()
        }
    }

    pub fn with_ceiling(mut self) -> Self {
        self.ceiling = Some(ContactInfo {
            normal: Vec2::NEG_Y,
            ..default()
        });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroundContact {
    #[default]
    None,
    /// Solid ground; cannot be dropped through
    FullGround,
    OneWayGround,
}

impl GroundContact {
    pub fn is_grounded(self) -> bool {
        self != GroundContact::None
    }
}

/// Edge notifications produced while resolving contacts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactEvent {
    GroundEntered(ContactInfo),
    CeilingHit(ContactInfo),
}

/// Authoritative velocity plus ground and ceiling classification.
#[derive(Debug, Clone)]
pub struct Actor {
    velocity: Vec2,
    ground: GroundContact,
    on_ceiling: bool,
    one_way_clear_below: bool,
    drop_through: FrameTimer,
}

impl Actor {
    pub fn new(drop_through: FrameTimer) -> Self {
        Self {
            velocity: Vec2::ZERO,
            ground: GroundContact::None,
            on_ceiling: false,
            one_way_clear_below: false,
            drop_through,
        }
    }

    pub fn ground_contact(&self) -> GroundContact {
        self.ground
    }

    pub fn is_grounded(&self) -> bool {
        self.ground.is_grounded()
    }

    pub fn is_touching_ceiling(&self) -> bool {
        self.on_ceiling
    }

    pub fn is_dropping_through(&self) -> bool {
        self.drop_through.is_running()
    }

    /// Whether one-way platforms should currently block this body.
    ///
    /// Only from above: a platform must lie beneath the feet and the body must
    /// be clear of every one-way collider, so a body still inside a platform
    /// after the drop-through window closes keeps falling.
    pub fn collides_with_one_way(&self) -> bool {
        self.one_way_clear_below && self.accepts_one_way_ground()
    }

    fn accepts_one_way_ground(&self) -> bool {
        !self.is_dropping_through() && self.velocity.y <= 0.0
    }

    /// Take the velocity the physics engine resolved since the last tick.
    pub fn sync_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Classify this tick's contacts and report enter edges.
    ///
    /// Solid ground wins over a one-way platform. One-way contacts are ignored
    /// while rising or while a drop-through window is open.
    pub fn resolve_contacts(&mut self, contacts: &ContactSet) -> Vec<ContactEvent> {
        let mut events = Vec::new();

        self.one_way_clear_below = contacts.one_way_beneath && !contacts.one_way_overlap;
        let one_way = contacts
            .one_way_ground
            .filter(|_| self.accepts_one_way_ground());

        let (ground, ground_info) = match (contacts.solid_ground, one_way) {
            (Some(info), _) => (GroundContact::FullGround, Some(info)),
            (None, Some(info)) => (GroundContact::OneWayGround, Some(info)),
            (None, None) => (GroundContact::None, None),
        };

        let was_grounded = self.ground.is_grounded();
        self.ground = ground;
        if let (false, Some(info)) = (was_grounded, ground_info) {
            events.push(ContactEvent::GroundEntered(info));
        }

        let was_on_ceiling = self.on_ceiling;
        self.on_ceiling = contacts.ceiling.is_some();
        if let (false, Some(info)) = (was_on_ceiling, contacts.ceiling) {
            events.push(ContactEvent::CeilingHit(info));
        }

        events
    }

    /// Pull the body down, capping fall speed.
    pub fn apply_gravity(&mut self, gravity: f32, max_fall_speed: f32, dt: f32) {
        self.velocity.y = (self.velocity.y - gravity * dt).max(-max_fall_speed);
    }

    /// Advance per-frame timers.
    pub fn tick(&mut self) {
        self.drop_through.tick();
    }
}

impl VelocitySink for Actor {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity_x(&mut self, vx: f32) {
        self.velocity.x = vx;
    }

    fn set_velocity_y(&mut self, vy: f32) {
        self.velocity.y = vy;
    }
}

impl CharacterBody for Actor {
    fn is_on_ground_one_way(&self) -> bool {
        self.ground == GroundContact::OneWayGround
    }

    fn ignore_one_way_platforms(&mut self) {
        self.drop_through.start();
        if self.ground == GroundContact::OneWayGround {
            self.ground = GroundContact::None;
        }
    }
}
