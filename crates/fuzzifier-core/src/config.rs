//! Fuzzy membership configuration.
//!
//! Breakpoints for the distance and angle terms are read once from a JSON file
//! of the form
//!
//! ```json
//! {
//!   "distances": { "close": [0, 0, 300], "near": [100, 300, 600], "far": [400, 1000, 1000] },
//!   "angle": { "acute": [0, 0, 90], "right": [45, 90, 135], "obtuse": [90, 180, 180] }
//! }
//! ```
//!
//! Every term is required. A missing key, a triangle with the wrong number of
//! points, a non-finite value, or an unordered triangle is a hard error.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::{AngleTerm, DistanceTerm};

/// Triangular membership breakpoints `[a, b, c]` with `a <= b <= c`.
pub type Triangle = [f64; 3];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read fuzzy config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed fuzzy config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{term}: breakpoint {index} is not finite")]
    NonFinite { term: TermRef, index: usize },
    #[error("{term}: breakpoints {points:?} are not ordered a <= b <= c")]
    InvalidTriangle { term: TermRef, points: Triangle },
    #[error("breakpoint index {0} out of range (expected 0..=2)")]
    BreakpointIndex(usize),
}

/// Names one configured membership function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermRef {
    Distance(DistanceTerm),
    Angle(AngleTerm),
}

impl fmt::Display for TermRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermRef::Distance(t) => write!(f, "distances.{}", t.name()),
            TermRef::Angle(t) => write!(f, "angle.{}", t.name()),
        }
    }
}

/// One breakpoint of one membership function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Breakpoint {
    pub term: TermRef,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceTerms {
    pub close: Triangle,
    pub near: Triangle,
    pub far: Triangle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleTerms {
    pub acute: Triangle,
    pub right: Triangle,
    pub obtuse: Triangle,
}

/// Breakpoints for every input term of the threat system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyConfig {
    pub distances: DistanceTerms,
    pub angle: AngleTerms,
}

impl FuzzyConfig {
    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::info!("loaded fuzzy config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: FuzzyConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the config back out as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn distance(&self, term: DistanceTerm) -> &Triangle {
        match term {
            DistanceTerm::Close => &self.distances.close,
            DistanceTerm::Near => &self.distances.near,
            DistanceTerm::Far => &self.distances.far,
        }
    }

    pub fn angle(&self, term: AngleTerm) -> &Triangle {
        match term {
            AngleTerm::Acute => &self.angle.acute,
            AngleTerm::Right => &self.angle.right,
            AngleTerm::Obtuse => &self.angle.obtuse,
        }
    }

    pub fn triangle(&self, term: TermRef) -> &Triangle {
        match term {
            TermRef::Distance(t) => self.distance(t),
            TermRef::Angle(t) => self.angle(t),
        }
    }

    fn triangle_mut(&mut self, term: TermRef) -> &mut Triangle {
        match term {
            TermRef::Distance(DistanceTerm::Close) => &mut self.distances.close,
            TermRef::Distance(DistanceTerm::Near) => &mut self.distances.near,
            TermRef::Distance(DistanceTerm::Far) => &mut self.distances.far,
            TermRef::Angle(AngleTerm::Acute) => &mut self.angle.acute,
            TermRef::Angle(AngleTerm::Right) => &mut self.angle.right,
            TermRef::Angle(AngleTerm::Obtuse) => &mut self.angle.obtuse,
        }
    }

    /// Every configured term, distances first.
    pub fn terms() -> impl Iterator<Item = TermRef> {
        DistanceTerm::ALL
            .into_iter()
            .map(TermRef::Distance)
            .chain(AngleTerm::ALL.into_iter().map(TermRef::Angle))
    }

    /// Every adjustable breakpoint, in a stable order.
    pub fn breakpoints() -> Vec<Breakpoint> {
        Self::terms()
            .flat_map(|term| (0..3).map(move |index| Breakpoint { term, index }))
            .collect()
    }

    /// Check every triangle is finite and ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for term in Self::terms() {
            validate_triangle(term, self.triangle(term))?;
        }
        Ok(())
    }

    pub fn get(&self, bp: Breakpoint) -> Result<f64, ConfigError> {
        self.triangle(bp.term)
            .get(bp.index)
            .copied()
            .ok_or(ConfigError::BreakpointIndex(bp.index))
    }

    /// Shift one breakpoint by `delta`. The move is rejected, leaving the
    /// config untouched, if it would unorder the triangle.
    pub fn adjust(&mut self, bp: Breakpoint, delta: f64) -> Result<f64, ConfigError> {
        let current = self.get(bp)?;
        let mut candidate = *self.triangle(bp.term);
        candidate[bp.index] = current + delta;
        validate_triangle(bp.term, &candidate)?;
        *self.triangle_mut(bp.term) = candidate;
        Ok(candidate[bp.index])
    }
}

fn validate_triangle(term: TermRef, points: &Triangle) -> Result<(), ConfigError> {
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(ConfigError::NonFinite { term, index });
    }
    if points[0] > points[1] || points[1] > points[2] {
        return Err(ConfigError::InvalidTriangle {
            term,
            points: *points,
        });
    }
    Ok(())
}

impl Default for FuzzyConfig {
    /// The reference breakpoints shipped in `config/threats_config.json`.
    fn default() -> Self {
        Self {
            distances: DistanceTerms {
                close: [0.0, 0.0, 300.0],
                near: [100.0, 300.0, 600.0],
                far: [400.0, 1000.0, 1000.0],
            },
            angle: AngleTerms {
                acute: [0.0, 0.0, 90.0],
                right: [45.0, 90.0, 135.0],
                obtuse: [90.0, 180.0, 180.0],
            },
        }
    }
}
