//! Data structures for the league phase draw: teams, pots, fixtures, options.

mod draw;
mod fixture;
mod team;

pub use draw::{ConstraintLevel, DrawError, DrawOptions};
pub use fixture::{Fixture, Matchday, FIXTURE_COUNT, MATCHDAY_COUNT, MATCHES_PER_MATCHDAY};
pub use team::{Pot, Team, TeamId, POT_SIZE, TEAM_COUNT};
