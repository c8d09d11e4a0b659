//! Swiss-style league phase fixture scheduler: library with models and draw logic.

pub mod diagnostics;
pub mod logic;
pub mod models;

pub use diagnostics::{DiagnosticSink, LogDiagnostics, NoopDiagnostics, PotCountryDistribution};
pub use logic::{
    assign_opponents, circle_method_rounds, draw_league_phase, draw_league_phase_with,
    orient_edges, schedule_rounds, validate_roster, Pairing, TeamInfo, OPPONENTS_PER_POT,
    SCHEDULE_ATTEMPTS,
};
pub use models::{
    ConstraintLevel, DrawError, DrawOptions, Fixture, Matchday, Pot, Team, TeamId, FIXTURE_COUNT,
    MATCHDAY_COUNT, MATCHES_PER_MATCHDAY, POT_SIZE, TEAM_COUNT,
};
