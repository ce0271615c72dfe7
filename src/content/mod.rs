//! Content domain: data-driven movement tuning loaded at startup.

mod loader;
mod validation;

pub use loader::{ContentLoadError, LoadErrorKind, load_movement_tuning, parse_movement_tuning};
pub use validation::{TuningError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

/// Path of the tuning file, relative to the working directory.
pub const MOVEMENT_TUNING_PATH: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Insert `MovementTuning` if the file is usable.
///
/// A missing file falls back to defaults. A file that fails to parse or
/// validate leaves the resource absent so the player is never spawned with it.
fn load_content(mut commands: Commands) {
    let tuning = match load_movement_tuning(Path::new(MOVEMENT_TUNING_PATH)) {
        Ok(tuning) => tuning,
        Err(e) if e.kind == LoadErrorKind::Missing => {
            warn!("{}; using default movement tuning", e);
            crate::movement::MovementTuning::default()
        }
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for err in &errors {
            error!("Invalid movement tuning: {}", err);
        }
        return;
    }

    info!(
        "Movement tuning loaded: max_jumps={}, buffer={} frames, jump_height={:.0}",
        tuning.max_jumps,
        tuning.jump_buffer_frames,
        tuning.single_jump_height()
    );
    commands.insert_resource(tuning);
}
