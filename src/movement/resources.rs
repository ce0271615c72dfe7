//! Movement domain: tuning and input resources.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::FrameTimer;

/// Character tuning. Fixed once a controller has been built from it.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub run_speed: f32,
    pub jump_velocity: f32,
    /// Jumps available between landings, the ground jump included
    pub max_jumps: u8,
    pub jump_buffer_frames: u32,
    /// Horizontal speed scale from a jump until it is cut or lands
    pub jump_movement_multiplier: f32,
    pub double_jump_multiplier: f32,
    /// Fraction of upward speed kept when a jump is cut short
    pub jump_cut_multiplier: f32,
    /// Seconds one-way platforms are ignored after dropping through. Counted in
    /// logic frames at `tick_rate_hz`; collision stays off while still inside one.
    pub drop_through_time: f32,
    pub drop_through_speed: f32,
    pub move_dead_zone: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    /// Logic frames per second used to convert second-based windows to frames
    pub tick_rate_hz: f32,
    pub ground_probe_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            run_speed: 320.0,
            jump_velocity: 680.0,
            max_jumps: 2,
            jump_buffer_frames: 8,
            jump_movement_multiplier: 0.8,
            double_jump_multiplier: 0.85,
            jump_cut_multiplier: 0.5,
            drop_through_time: 0.2,
            drop_through_speed: 120.0,
            move_dead_zone: 0.1,
            gravity: 1800.0,
            max_fall_speed: 900.0,
            tick_rate_hz: 60.0,
            ground_probe_distance: 4.0,
        }
    }
}

impl MovementTuning {
    pub fn jump_buffer(&self) -> FrameTimer {
        FrameTimer::new(self.jump_buffer_frames)
    }

    pub fn drop_through_window(&self) -> FrameTimer {
        FrameTimer::from_duration(
            Duration::from_secs_f32(self.drop_through_time.max(0.0)),
            self.tick_rate_hz,
        )
    }

    /// Apex height of a ground jump: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }

    /// Height reached by chaining every jump at its apex.
    pub fn max_reachable_height(&self) -> f32 {
        let base = self.single_jump_height();
        let air_jumps = self.max_jumps.saturating_sub(1) as f32;
        let air = base * self.double_jump_multiplier * self.double_jump_multiplier;
        base + air * air_jumps
    }
}

/// Input sampled once per logic frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub down_held: bool,
}

impl MovementInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn press_jump() -> Self {
        Self {
            jump_just_pressed: true,
            jump_held: true,
            ..default()
        }
    }

    pub fn hold_jump() -> Self {
        Self {
            jump_held: true,
            ..default()
        }
    }

    pub fn with_axis(mut self, x: f32) -> Self {
        self.axis.x = x;
        self
    }

    pub fn with_down(mut self) -> Self {
        self.down_held = true;
        self.axis.y = -1.0;
        self
    }
}
