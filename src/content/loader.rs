//! Loader for RON tuning files at startup.

use ron::Options;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::movement::MovementTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    Missing,
    Io,
    Parse,
}

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub kind: LoadErrorKind,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse movement tuning from RON text. Omitted fields take their defaults.
pub fn parse_movement_tuning(contents: &str, file: &str) -> Result<MovementTuning, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            kind: LoadErrorKind::Parse,
            message: format!("Parse error: {}", e),
        })
}

/// Load movement tuning from a RON file.
pub fn load_movement_tuning(path: &Path) -> Result<MovementTuning, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        kind: if e.kind() == ErrorKind::NotFound {
            LoadErrorKind::Missing
        } else {
            LoadErrorKind::Io
        },
        message: format!("IO error: {}", e),
    })?;

    parse_movement_tuning(&contents, &file_name)
}
