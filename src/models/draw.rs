//! Draw configuration, constraint levels, and validation errors.

use crate::models::team::{Pot, TeamId};
use serde::{Deserialize, Serialize};

/// Errors raised while validating a draw roster. These are the only failures
/// the draw ever surfaces; every internal dead-end is retried and escalated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DrawError {
    /// The roster does not contain exactly the required number of teams.
    WrongTeamCount { expected: usize, actual: usize },
    /// A pot does not contain exactly the required number of teams.
    WrongPotSize {
        pot: Pot,
        expected: usize,
        actual: usize,
    },
    /// Two roster entries share the same team id.
    DuplicateTeamId(TeamId),
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawError::WrongTeamCount { expected, actual } => {
                write!(f, "roster must contain exactly {expected} teams (got {actual})")
            }
            DrawError::WrongPotSize {
                pot,
                expected,
                actual,
            } => {
                write!(f, "{pot} must contain exactly {expected} teams (got {actual})")
            }
            DrawError::DuplicateTeamId(id) => write!(f, "duplicate team id {id} in roster"),
        }
    }
}

impl std::error::Error for DrawError {}

/// Rung of the constraint relaxation ladder. The draw starts at the configured
/// level and escalates towards [`ConstraintLevel::CircleFallback`], which
/// cannot fail.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintLevel {
    /// Country protection on, per-foreign-country opponent cap on.
    #[default]
    Full,
    /// Country protection on, no per-country cap.
    NoCountryCap,
    /// No country constraints at all.
    Unconstrained,
    /// Deterministic circle-method schedule; ignores country constraints.
    CircleFallback,
}

/// Options controlling a draw.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawOptions {
    /// First constraint level to try; the ladder still escalates from here.
    pub start_level: ConstraintLevel,
    /// Max opponents a team may face from any single foreign country while at
    /// [`ConstraintLevel::Full`]. 0 means unlimited.
    pub max_country_opponents: u32,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            start_level: ConstraintLevel::Full,
            max_country_opponents: 2,
        }
    }
}
