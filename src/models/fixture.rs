//! Fixture: one scheduled match of the league phase.

use crate::models::team::{TeamId, TEAM_COUNT};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Matchday number, 1 through [`MATCHDAY_COUNT`].
pub type Matchday = u8;

/// Number of matchdays in the league phase.
pub const MATCHDAY_COUNT: usize = 8;

/// Fixtures played on each matchday (every team plays exactly once).
pub const MATCHES_PER_MATCHDAY: usize = TEAM_COUNT / 2;

/// Total fixtures across the whole league phase.
pub const FIXTURE_COUNT: usize = MATCHDAY_COUNT * MATCHES_PER_MATCHDAY;

/// A single scheduled fixture of the league phase.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub matchday: Matchday,
    pub date: NaiveDate,
    pub home_team: TeamId,
    pub away_team: TeamId,
}

impl Fixture {
    pub fn new(matchday: Matchday, date: NaiveDate, home_team: TeamId, away_team: TeamId) -> Self {
        Self {
            matchday,
            date,
            home_team,
            away_team,
        }
    }
}
