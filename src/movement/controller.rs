//! Movement domain: per-tick orchestration of body, runner and jumper.

use bevy::prelude::*;

use crate::content::{TuningError, validate_tuning};
use crate::movement::{
    Actor, CharacterBody, ContactEvent, ContactSet, Facing, FrameTimer, GroundContact, JumpPhase,
    Jumper, MovementInput, MovementTuning, Runner, VelocitySink,
};

/// What the jump logic did during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpAction {
    Jump { multiplier: f32 },
    DropThrough,
    Cancel,
}

/// Everything observable that happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<ContactEvent>,
    pub actions: Vec<JumpAction>,
}

impl TickReport {
    pub fn jumped(&self) -> bool {
        self.actions
            .iter()
            .any(|a| matches!(a, JumpAction::Jump { .. }))
    }

    pub fn count(&self, action: JumpAction) -> usize {
        self.actions.iter().filter(|a| **a == action).count()
    }
}

/// Player character state machine.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    tuning: MovementTuning,
    body: Actor,
    runner: Runner,
    jumper: Jumper,
    jump_buffer: FrameTimer,
    jumps_remaining: u8,
    jump_held: bool,
    facing: Facing,
}

impl PlayerController {
    /// Build a controller, rejecting tuning that fails validation.
    /// Every broken rule is reported, not just the first.
    pub fn new(tuning: MovementTuning) -> Result<Self, Vec<TuningError>> {
        let errors = validate_tuning(&tuning);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            body: Actor::new(tuning.drop_through_window()),
            runner: Runner::new(tuning.run_speed),
            jumper: Jumper::new(
                tuning.jump_velocity,
                tuning.jump_cut_multiplier,
                tuning.drop_through_speed,
            ),
            jump_buffer: tuning.jump_buffer(),
            jumps_remaining: tuning.max_jumps,
            jump_held: false,
            facing: Facing::default(),
            tuning,
        })
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn max_jumps(&self) -> u8 {
        self.tuning.max_jumps
    }

    pub fn jumps_remaining(&self) -> u8 {
        self.jumps_remaining
    }

    pub fn is_jumping(&self) -> bool {
        self.jumper.is_jumping()
    }

    pub fn phase(&self) -> JumpPhase {
        self.jumper.phase()
    }

    pub fn is_on_ground_one_way(&self) -> bool {
        self.body.is_on_ground_one_way()
    }

    pub fn ground_contact(&self) -> GroundContact {
        self.body.ground_contact()
    }

    pub fn is_grounded(&self) -> bool {
        self.body.is_grounded()
    }

    pub fn collides_with_one_way(&self) -> bool {
        self.body.collides_with_one_way()
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn jump_buffered(&self) -> bool {
        self.jump_buffer.is_running()
    }

    /// Take the velocity the physics engine resolved since the last tick.
    pub fn sync_velocity(&mut self, velocity: Vec2) {
        self.body.sync_velocity(velocity);
    }

    pub fn apply_gravity(&mut self, dt: f32) {
        self.body
            .apply_gravity(self.tuning.gravity, self.tuning.max_fall_speed, dt);
    }

    /// Run one logic tick.
    ///
    /// Contact events are handled before the jump buffer is evaluated, so a
    /// jump buffered before landing sees the refilled budget on the landing tick.
    pub fn tick(&mut self, input: &MovementInput, contacts: &ContactSet) -> TickReport {
        let mut report = TickReport {
            events: self.body.resolve_contacts(contacts),
            ..default()
        };

        self.jumper
            .update_phase(self.body.is_grounded(), self.body.velocity().y);

        for event in &report.events {
            match event {
                ContactEvent::GroundEntered(_) => {
                    self.jumps_remaining = self.tuning.max_jumps;
                    debug!("Landed: jumps_remaining={}", self.jumps_remaining);
                }
                ContactEvent::CeilingHit(_) => {
                    if self.jumper.cancel_jump(&mut self.body) {
                        report.actions.push(JumpAction::Cancel);
                        debug!("Ceiling hit: jump cancelled");
                    }
                }
            }
        }

        if input.jump_just_pressed {
            self.jump_buffer.start();
            self.jump_held = true;
        } else if !input.jump_held {
            self.jump_held = false;
        }

        if self.jump_buffer.is_running() && self.jumps_remaining > 0 {
            self.evaluate_buffered_jump(input, &mut report);
            self.jump_buffer.stop();
        }

        if !self.jump_held && self.jumper.is_jumping() && self.jumper.cancel_jump(&mut self.body)
        {
            report.actions.push(JumpAction::Cancel);
            debug!("Jump released: vy={:.1}", self.body.velocity().y);
        }

        self.apply_horizontal(input);

        self.jump_buffer.tick();
        self.body.tick();

        report
    }

    fn evaluate_buffered_jump(&mut self, input: &MovementInput, report: &mut TickReport) {
        if input.down_held && self.body.is_on_ground_one_way() {
            if self.jumper.jump_down(&mut self.body) {
                report.actions.push(JumpAction::DropThrough);
                debug!("Dropping through one-way platform");
            }
            return;
        }

        let is_double_jump = self.jumps_remaining < self.tuning.max_jumps;
        let multiplier = if is_double_jump {
            self.tuning.double_jump_multiplier
        } else {
            1.0
        };

        if self.jumper.jump(&mut self.body, multiplier) {
            self.jumps_remaining -= 1;
            report.actions.push(JumpAction::Jump { multiplier });
            debug!(
                "{}: multiplier={}, jumps_remaining={}",
                if is_double_jump { "Double jump" } else { "Jump" },
                multiplier,
                self.jumps_remaining
            );
        }
    }

    fn apply_horizontal(&mut self, input: &MovementInput) {
        let x = input.axis.x;
        if x.abs() < self.tuning.move_dead_zone || x.is_nan() {
            self.runner.stop(&mut self.body);
            return;
        }

        let multiplier = if self.jumper.is_jumping() {
            self.tuning.jump_movement_multiplier
        } else {
            1.0
        };
        self.runner.move_horizontal(&mut self.body, x, multiplier);
        if x > 0.0 {
            self.facing = Facing::Right;
        } else if x < 0.0 {
            self.facing = Facing::Left;
        }
    }
}
