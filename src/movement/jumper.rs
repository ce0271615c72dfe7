//! Movement domain: vertical jump state machine.

use crate::movement::{CharacterBody, VelocitySink};

/// Vertical state of the character.
///
/// | from                    | trigger                   | to                           |
/// |-------------------------|---------------------------|------------------------------|
/// | any                     | jump                      | Rising                       |
/// | Rising                  | cancel while vy > 0       | Cancelled                    |
/// | Rising, Falling(jump)   | cancel while vy <= 0      | Falling { jumping: false }   |
/// | Rising                  | apex (vy <= 0) in the air | Falling { jumping: true }    |
/// | Cancelled               | apex (vy <= 0) in the air | Falling { jumping: false }   |
/// | Grounded                | ground lost               | Falling { jumping: false }   |
/// | any                     | drop through              | Falling { jumping: false }   |
/// | not ascending           | ground contact            | Grounded                     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Grounded,
    Rising,
    /// Descending. `jumping` stays set from an uncut jump until landing.
    Falling { jumping: bool },
    /// Ascent cut short; still moving up with reduced speed
    Cancelled,
}

impl JumpPhase {
    pub fn is_ascending(self) -> bool {
        matches!(self, JumpPhase::Rising | JumpPhase::Cancelled)
    }

    /// In the air from a jump that has not been cut or ended by a landing.
    pub fn is_jumping(self) -> bool {
        matches!(
            self,
            JumpPhase::Rising | JumpPhase::Falling { jumping: true }
        )
    }
}

#[derive(Debug, Clone)]
pub struct Jumper {
    jump_velocity: f32,
    cut_multiplier: f32,
    drop_through_speed: f32,
    phase: JumpPhase,
}

impl Jumper {
    pub fn new(jump_velocity: f32, cut_multiplier: f32, drop_through_speed: f32) -> Self {
        Self {
            jump_velocity,
            cut_multiplier,
            drop_through_speed,
            phase: JumpPhase::Grounded,
        }
    }

    pub fn phase(&self) -> JumpPhase {
        self.phase
    }

    pub fn is_jumping(&self) -> bool {
        self.phase.is_jumping()
    }

    /// Launch upward. Returns false for a non-positive multiplier, which
    /// leaves the body untouched.
    pub fn jump(&mut self, body: &mut impl VelocitySink, multiplier: f32) -> bool {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return false;
        }
        body.set_velocity_y(self.jump_velocity * multiplier);
        self.phase = JumpPhase::Rising;
        true
    }

    /// Fall through the one-way platform underfoot. No-op anywhere else.
    pub fn jump_down(&mut self, body: &mut impl CharacterBody) -> bool {
        if !body.is_on_ground_one_way() {
            return false;
        }
        body.ignore_one_way_platforms();
        let vy = body.velocity().y.min(-self.drop_through_speed);
        body.set_velocity_y(vy);
        self.phase = JumpPhase::Falling { jumping: false };
        true
    }

    /// End the active jump, cutting the ascent short if still rising.
    /// No-op unless jumping.
    pub fn cancel_jump(&mut self, body: &mut impl VelocitySink) -> bool {
        if !self.is_jumping() {
            return false;
        }
        let vy = body.velocity().y;
        self.phase = if vy > 0.0 {
            body.set_velocity_y(vy * self.cut_multiplier);
            JumpPhase::Cancelled
        } else {
            JumpPhase::Falling { jumping: false }
        };
        true
    }

    /// Advance the phase from this tick's ground state and vertical velocity.
    pub fn update_phase(&mut self, grounded: bool, vertical_velocity: f32) {
        let ascending = vertical_velocity > 0.0;
        self.phase = match self.phase {
            JumpPhase::Rising | JumpPhase::Cancelled if ascending => self.phase,
            _ if grounded => JumpPhase::Grounded,
            JumpPhase::Rising => JumpPhase::Falling { jumping: true },
            JumpPhase::Falling { jumping } => JumpPhase::Falling { jumping },
            JumpPhase::Grounded | JumpPhase::Cancelled => JumpPhase::Falling { jumping: false },
        };
    }
}
