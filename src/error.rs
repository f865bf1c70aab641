//! Error type for board construction and configuration
//!
//! Illegal moves are not errors; see [`crate::rules::RotateOutcome`].

use std::path::PathBuf;

use crate::rules::{PointId, RingId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("board scale must be finite and within [{min}, {max}], got {scale}")]
    InvalidScale { scale: f32, min: f32, max: f32 },

    #[error("built {actual} {what}, expected {expected}")]
    UnexpectedCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("expected {expected} rings, built {actual}")]
    RingCount { expected: usize, actual: usize },

    #[error("point {point} lies on {rings} ring(s), every point needs at least two")]
    UnderconnectedPoint { point: PointId, rings: usize },

    #[error("point {point} references unknown ring {ring}")]
    UnknownRing { point: PointId, ring: RingId },

    #[error("quad {index} is malformed: {points:?}")]
    MalformedQuad { index: usize, points: Vec<PointId> },

    #[error("quad {index} duplicates an earlier quad")]
    DuplicateQuad { index: usize },

    #[error("failed to access settings file {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
