//! Draw controller: roster validation, the constraint relaxation ladder, and
//! fixture materialization.

use crate::diagnostics::{DiagnosticSink, NoopDiagnostics, PotCountryDistribution};
use crate::logic::circle::circle_method_rounds;
use crate::logic::opponents::{assign_opponents, TeamInfo};
use crate::logic::orientation::orient_edges;
use crate::logic::rounds::schedule_rounds;
use crate::logic::Pairing;
use crate::models::{
    ConstraintLevel, DrawError, DrawOptions, Fixture, Matchday, Pot, Team, MATCHDAY_COUNT,
    POT_SIZE, TEAM_COUNT,
};
use chrono::NaiveDate;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// One rung of the relaxation ladder: a constraint configuration and its
/// attempt budget. Tried in order; the circle-method fallback sits below the
/// last rung and cannot fail.
struct LevelConfig {
    level: ConstraintLevel,
    country_protection: bool,
    use_country_cap: bool,
    max_attempts: u32,
}

const LADDER: [LevelConfig; 3] = [
    LevelConfig {
        level: ConstraintLevel::Full,
        country_protection: true,
        use_country_cap: true,
        max_attempts: 500,
    },
    LevelConfig {
        level: ConstraintLevel::NoCountryCap,
        country_protection: true,
        use_country_cap: false,
        max_attempts: 200,
    },
    LevelConfig {
        level: ConstraintLevel::Unconstrained,
        country_protection: false,
        use_country_cap: false,
        max_attempts: 200,
    },
];

/// Draw the complete league phase with default options, no diagnostics, and
/// thread-local randomness. See [`draw_league_phase_with`].
pub fn draw_league_phase(
    teams: &[Team],
    round_dates: &[NaiveDate; MATCHDAY_COUNT],
) -> Result<Vec<Fixture>, DrawError> {
    draw_league_phase_with(
        teams,
        round_dates,
        &DrawOptions::default(),
        &NoopDiagnostics,
        &mut rand::thread_rng(),
    )
}

/// Draw the complete league phase: every team gets 2 opponents from each pot,
/// 4 home / 4 away, spread over 8 matchdays with each team playing once per
/// matchday.
///
/// Starting at `options.start_level`, each constraint level runs the
/// assign → orient → schedule pipeline up to its attempt budget, then reports
/// the escalation through `sink` and drops to the next level. The final
/// circle-method fallback always succeeds, so apart from roster validation
/// this function cannot fail.
pub fn draw_league_phase_with(
    teams: &[Team],
    round_dates: &[NaiveDate; MATCHDAY_COUNT],
    options: &DrawOptions,
    sink: &dyn DiagnosticSink,
    rng: &mut impl Rng,
) -> Result<Vec<Fixture>, DrawError> {
    validate_roster(teams)?;

    let info = intern_teams(teams);

    for config in LADDER.iter().filter(|c| c.level >= options.start_level) {
        let cap = if config.use_country_cap {
            options.max_country_opponents
        } else {
            0
        };
        for _ in 0..config.max_attempts {
            if let Some(rounds) = attempt_draw(&info, config.country_protection, cap, rng) {
                return Ok(build_fixtures(teams, &rounds, round_dates));
            }
        }
        sink.constraint_level_abandoned(
            config.level,
            config.max_attempts,
            &pot_country_distribution(teams),
        );
    }

    let rounds = circle_fallback(rng);
    Ok(build_fixtures(teams, &rounds, round_dates))
}

/// Check the roster shape before any scheduling runs: exactly [`TEAM_COUNT`]
/// teams, exactly [`POT_SIZE`] per pot, all ids distinct.
pub fn validate_roster(teams: &[Team]) -> Result<(), DrawError> {
    if teams.len() != TEAM_COUNT {
        return Err(DrawError::WrongTeamCount {
            expected: TEAM_COUNT,
            actual: teams.len(),
        });
    }
    let mut seen = HashSet::new();
    for team in teams {
        if !seen.insert(team.id) {
            return Err(DrawError::DuplicateTeamId(team.id));
        }
    }
    for pot in Pot::ALL {
        let count = teams.iter().filter(|t| t.pot == pot).count();
        if count != POT_SIZE {
            return Err(DrawError::WrongPotSize {
                pot,
                expected: POT_SIZE,
                actual: count,
            });
        }
    }
    Ok(())
}

/// One pipeline attempt: assignment, orientation, round extraction. Returns
/// per-round directed (home, away) index pairs.
fn attempt_draw(
    info: &[TeamInfo],
    country_protection: bool,
    max_country_opponents: u32,
    rng: &mut impl Rng,
) -> Option<Vec<Vec<(usize, usize)>>> {
    let pairings = assign_opponents(info, country_protection, max_country_opponents, rng)?;
    let directed = orient_edges(info.len(), &pairings);
    let rounds = schedule_rounds(info.len(), &directed, MATCHDAY_COUNT, rng)?;
    Some(
        rounds
            .into_iter()
            .map(|round| round.into_iter().map(|m| directed[m]).collect())
            .collect(),
    )
}

/// Guaranteed fallback: sample 8 circle-method rotations, orient the combined
/// pairing set, and hand every oriented match back to the matchday of the
/// rotation that produced it.
fn circle_fallback(rng: &mut impl Rng) -> Vec<Vec<(usize, usize)>> {
    let rotation_rounds = circle_method_rounds(TEAM_COUNT, MATCHDAY_COUNT, rng);

    let mut matchday_of: HashMap<Pairing, usize> = HashMap::new();
    let mut edges = Vec::with_capacity(TEAM_COUNT / 2 * MATCHDAY_COUNT);
    for (day, pairs) in rotation_rounds.iter().enumerate() {
        for &pair in pairs {
            matchday_of.insert(pair, day);
            edges.push(pair);
        }
    }

    let mut rounds: Vec<Vec<(usize, usize)>> = vec![Vec::new(); MATCHDAY_COUNT];
    for (home, away) in orient_edges(TEAM_COUNT, &edges) {
        let day = matchday_of[&Pairing::new(home, away)];
        rounds[day].push((home, away));
    }
    rounds
}

/// Dense per-team pot/country indices for the assigner; countries are
/// interned in roster order.
fn intern_teams(teams: &[Team]) -> Vec<TeamInfo> {
    let mut countries: HashMap<&str, usize> = HashMap::new();
    teams
        .iter()
        .map(|team| {
            let next = countries.len();
            let country = *countries.entry(team.country.as_str()).or_insert(next);
            TeamInfo {
                pot: team.pot.index(),
                country,
            }
        })
        .collect()
}

fn pot_country_distribution(teams: &[Team]) -> PotCountryDistribution {
    let mut distribution: PotCountryDistribution = Default::default();
    for pot in Pot::ALL {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for team in teams.iter().filter(|t| t.pot == pot) {
            *counts.entry(team.country.as_str()).or_default() += 1;
        }
        let mut entries: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(country, count)| (country.to_owned(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        distribution[pot.index()] = entries;
    }
    distribution
}

fn build_fixtures(
    teams: &[Team],
    rounds: &[Vec<(usize, usize)>],
    round_dates: &[NaiveDate; MATCHDAY_COUNT],
) -> Vec<Fixture> {
    let mut fixtures = Vec::with_capacity(TEAM_COUNT / 2 * MATCHDAY_COUNT);
    for (day, matches) in rounds.iter().enumerate() {
        let matchday = (day + 1) as Matchday;
        for &(home, away) in matches {
            fixtures.push(Fixture::new(
                matchday,
                round_dates[day],
                teams[home].id,
                teams[away].id,
            ));
        }
    }
    fixtures
}
