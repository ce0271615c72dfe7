//! Validation for movement tuning loaded from content files.

use crate::movement::MovementTuning;

/// A tuning value that would make the controller misbehave.
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// `max_jumps` must allow at least the ground jump
    ZeroMaxJumps,
    ZeroJumpBufferFrames,
    NotPositive { field: &'static str, value: f32 },
    Negative { field: &'static str, value: f32 },
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    /// Must lie strictly between 0 and 1
    NotFraction { field: &'static str, value: f32 },
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::ZeroMaxJumps => write!(f, "max_jumps must be at least 1"),
            TuningError::ZeroJumpBufferFrames => {
                write!(f, "jump_buffer_frames must be at least 1")
            }
            TuningError::NotPositive { field, value } => {
                write!(f, "{} must be a positive finite number, got {}", field, value)
            }
            TuningError::Negative { field, value } => {
                write!(f, "{} must be zero or a positive finite number, got {}", field, value)
            }
            TuningError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "{} must lie in [{}, {}), got {}",
                field, min, max, value
            ),
            TuningError::NotFraction { field, value } => {
                write!(f, "{} must lie in (0, 1), got {}", field, value)
            }
        }
    }
}

impl std::error::Error for TuningError {}

/// Helper macro for the positive-and-finite rule shared by most fields
macro_rules! check_positive {
    ($errors:expr, $tuning:expr, $field:ident) => {
        let value = $tuning.$field;
        if !value.is_finite() || value <= 0.0 {
            $errors.push(TuningError::NotPositive {
                field: stringify!($field),
                value,
            });
        }
    };
}

macro_rules! check_range {
    ($errors:expr, $tuning:expr, $field:ident, $min:expr, $max:expr) => {
        let value = $tuning.$field;
        if value.is_nan() || value < $min || value >= $max {
            $errors.push(TuningError::OutOfRange {
                field: stringify!($field),
                value,
                min: $min,
                max: $max,
            });
        }
    };
}

macro_rules! check_fraction {
    ($errors:expr, $tuning:expr, $field:ident) => {
        let value = $tuning.$field;
        if value.is_nan() || value <= 0.0 || value >= 1.0 {
            $errors.push(TuningError::NotFraction {
                field: stringify!($field),
                value,
            });
        }
    };
}

/// Validate every tuning rule.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<TuningError> {
    let mut errors = Vec::new();

    if tuning.max_jumps == 0 {
        errors.push(TuningError::ZeroMaxJumps);
    }
    if tuning.jump_buffer_frames == 0 {
        errors.push(TuningError::ZeroJumpBufferFrames);
    }

    check_positive!(errors, tuning, run_speed);
    check_positive!(errors, tuning, jump_velocity);
    check_positive!(errors, tuning, jump_movement_multiplier);
    check_positive!(errors, tuning, double_jump_multiplier);
    check_positive!(errors, tuning, drop_through_time);
    check_positive!(errors, tuning, drop_through_speed);
    check_positive!(errors, tuning, max_fall_speed);
    check_positive!(errors, tuning, tick_rate_hz);
    check_positive!(errors, tuning, ground_probe_distance);

    check_fraction!(errors, tuning, jump_cut_multiplier);
    check_range!(errors, tuning, move_dead_zone, 0.0, 1.0);

    if !tuning.gravity.is_finite() || tuning.gravity < 0.0 {
        errors.push(TuningError::Negative {
            field: "gravity",
            value: tuning.gravity,
        });
    }

    errors
}
