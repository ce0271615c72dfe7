//! Movement domain: horizontal velocity shaping.

use crate::movement::VelocitySink;

/// Sets horizontal velocity directly from a direction; no acceleration curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Runner {
    run_speed: f32,
}

impl Runner {
    pub fn new(run_speed: f32) -> Self {
        Self { run_speed }
    }

    pub fn run_speed(&self) -> f32 {
        self.run_speed
    }

    /// Only the sign of `direction` matters. A zero direction stops the body.
    pub fn move_horizontal(&self, body: &mut impl VelocitySink, direction: f32, multiplier: f32) {
        if direction == 0.0 || direction.is_nan() {
            self.stop(body);
            return;
        }
        body.set_velocity_x(direction.signum() * self.run_speed * multiplier);
    }

    pub fn stop(&self, body: &mut impl VelocitySink) {
        body.set_velocity_x(0.0);
    }
}
