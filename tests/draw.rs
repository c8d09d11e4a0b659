//! Integration tests for the league phase draw: structural invariants,
//! constraint satisfaction, escalation, and roster validation.

use chrono::NaiveDate;
use league_draw::{
    circle_method_rounds, draw_league_phase, draw_league_phase_with, orient_edges,
    schedule_rounds, ConstraintLevel, DiagnosticSink, DrawError, DrawOptions, Fixture,
    NoopDiagnostics, Pairing, Pot, PotCountryDistribution, Team, TeamId, FIXTURE_COUNT,
    MATCHDAY_COUNT, MATCHES_PER_MATCHDAY, POT_SIZE, TEAM_COUNT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

const SPREAD_COUNTRIES: [&str; 9] = [
    "ENG", "ESP", "GER", "ITA", "FRA", "POR", "NED", "SCO", "TUR",
];

/// Roster with 9 distinct countries in every pot: the country constraints are
/// fully satisfiable.
fn spread_roster() -> Vec<Team> {
    let mut teams = Vec::new();
    for pot in Pot::ALL {
        for country in SPREAD_COUNTRIES {
            teams.push(Team::new(format!("{country} {pot}"), pot, country));
        }
    }
    teams
}

/// Pot One drawn from only two countries. Country protection is structurally
/// unsatisfiable there: the nine within-pot pairings would all have to cross a
/// 5/4 country split, which cannot balance.
fn adversarial_roster() -> Vec<Team> {
    let mut teams = Vec::new();
    for slot in 0..POT_SIZE {
        let country = if slot < 5 { "AAA" } else { "BBB" };
        teams.push(Team::new(format!("{country} {slot}"), Pot::One, country));
    }
    for pot in [Pot::Two, Pot::Three, Pot::Four] {
        for country in SPREAD_COUNTRIES {
            teams.push(Team::new(format!("{country} {pot}"), pot, country));
        }
    }
    teams
}

fn round_dates() -> [NaiveDate; MATCHDAY_COUNT] {
    let start = NaiveDate::from_ymd_opt(2025, 9, 16).unwrap();
    let mut dates = [start; MATCHDAY_COUNT];
    for (matchday, date) in dates.iter_mut().enumerate() {
        *date = start + chrono::Duration::weeks(2 * matchday as i64);
    }
    dates
}

/// Sink that records every escalation for later assertions.
#[derive(Default)]
struct RecordingSink {
    events: RefCell<Vec<(ConstraintLevel, u32, PotCountryDistribution)>>,
}

impl DiagnosticSink for RecordingSink {
    fn constraint_level_abandoned(
        &self,
        level: ConstraintLevel,
        attempts: u32,
        pot_countries: &PotCountryDistribution,
    ) {
        self.events
            .borrow_mut()
            .push((level, attempts, pot_countries.clone()));
    }
}

/// Assert every structural invariant of a finished schedule.
fn assert_valid_schedule(teams: &[Team], fixtures: &[Fixture], dates: &[NaiveDate; MATCHDAY_COUNT]) {
    assert_eq!(fixtures.len(), FIXTURE_COUNT);

    let mut home_counts: HashMap<TeamId, usize> = HashMap::new();
    let mut away_counts: HashMap<TeamId, usize> = HashMap::new();
    let mut pairs: HashSet<(TeamId, TeamId)> = HashSet::new();
    let mut per_day: Vec<HashSet<TeamId>> = vec![HashSet::new(); MATCHDAY_COUNT];
    let mut day_counts = [0usize; MATCHDAY_COUNT];

    for fixture in fixtures {
        assert_ne!(fixture.home_team, fixture.away_team, "team paired with itself");
        assert!(
            (1..=MATCHDAY_COUNT as u8).contains(&fixture.matchday),
            "matchday out of range: {}",
            fixture.matchday
        );
        let day = fixture.matchday as usize - 1;
        assert_eq!(fixture.date, dates[day]);
        day_counts[day] += 1;

        let key = if fixture.home_team < fixture.away_team {
            (fixture.home_team, fixture.away_team)
        } else {
            (fixture.away_team, fixture.home_team)
        };
        assert!(pairs.insert(key), "pairing repeated across the schedule");

        assert!(per_day[day].insert(fixture.home_team), "home team twice on a matchday");
        assert!(per_day[day].insert(fixture.away_team), "away team twice on a matchday");

        *home_counts.entry(fixture.home_team).or_default() += 1;
        *away_counts.entry(fixture.away_team).or_default() += 1;
    }

    for team in teams {
        assert_eq!(home_counts.get(&team.id).copied().unwrap_or(0), 4);
        assert_eq!(away_counts.get(&team.id).copied().unwrap_or(0), 4);
    }
    for day in 0..MATCHDAY_COUNT {
        assert_eq!(day_counts[day], MATCHES_PER_MATCHDAY);
        assert_eq!(per_day[day].len(), TEAM_COUNT);
    }
}

#[test]
fn valid_draw_has_144_fixtures() {
    let teams = spread_roster();
    let dates = round_dates();
    let fixtures = draw_league_phase(&teams, &dates).unwrap();
    assert_valid_schedule(&teams, &fixtures, &dates);
}

#[test]
fn satisfiable_countries_resolve_at_full_strictness() {
    let teams = spread_roster();
    let dates = round_dates();
    let sink = RecordingSink::default();
    let fixtures = draw_league_phase_with(
        &teams,
        &dates,
        &DrawOptions::default(),
        &sink,
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();
    assert_valid_schedule(&teams, &fixtures, &dates);

    assert!(sink.events.borrow().is_empty(), "no escalation expected");

    let country_of: HashMap<TeamId, &str> = teams
        .iter()
        .map(|t| (t.id, t.country.as_str()))
        .collect();
    let pot_of: HashMap<TeamId, Pot> = teams.iter().map(|t| (t.id, t.pot)).collect();

    let mut foreign_opponents: HashMap<(TeamId, &str), u32> = HashMap::new();
    let mut pot_opponents: HashMap<(TeamId, Pot), u32> = HashMap::new();
    for fixture in &fixtures {
        let (home, away) = (fixture.home_team, fixture.away_team);
        assert_ne!(
            country_of[&home], country_of[&away],
            "same-country fixture despite satisfiable protection"
        );
        *foreign_opponents.entry((home, country_of[&away])).or_default() += 1;
        *foreign_opponents.entry((away, country_of[&home])).or_default() += 1;
        *pot_opponents.entry((home, pot_of[&away])).or_default() += 1;
        *pot_opponents.entry((away, pot_of[&home])).or_default() += 1;
    }
    for &count in foreign_opponents.values() {
        assert!(count <= 2, "per-country opponent cap exceeded");
    }
    for team in &teams {
        for pot in Pot::ALL {
            assert_eq!(
                pot_opponents.get(&(team.id, pot)).copied().unwrap_or(0),
                2,
                "expected exactly 2 opponents from each pot"
            );
        }
    }
}

#[test]
fn adversarial_pot_escalates_and_still_schedules() {
    let teams = adversarial_roster();
    let dates = round_dates();
    let sink = RecordingSink::default();
    let fixtures = draw_league_phase_with(
        &teams,
        &dates,
        &DrawOptions::default(),
        &sink,
        &mut StdRng::seed_from_u64(2),
    )
    .unwrap();
    assert_valid_schedule(&teams, &fixtures, &dates);

    let events = sink.events.borrow();
    assert_eq!(events.len(), 2, "both country-protected levels must fail");
    assert_eq!(events[0].0, ConstraintLevel::Full);
    assert_eq!(events[0].1, 500);
    assert_eq!(events[1].0, ConstraintLevel::NoCountryCap);
    assert_eq!(events[1].1, 200);
    // pot One's country distribution rides along in the diagnostic
    assert_eq!(
        events[0].2[0],
        vec![("AAA".to_string(), 5), ("BBB".to_string(), 4)]
    );
}

#[test]
fn repeated_draws_stay_structurally_valid() {
    let teams = spread_roster();
    let dates = round_dates();
    for _ in 0..20 {
        let fixtures = draw_league_phase(&teams, &dates).unwrap();
        assert_valid_schedule(&teams, &fixtures, &dates);
    }
}

#[test]
fn wrong_team_count_rejected() {
    let mut teams = spread_roster();
    teams.pop();
    assert_eq!(
        draw_league_phase(&teams, &round_dates()),
        Err(DrawError::WrongTeamCount {
            expected: TEAM_COUNT,
            actual: TEAM_COUNT - 1,
        })
    );
}

#[test]
fn wrong_pot_size_rejected() {
    let mut teams = spread_roster();
    teams[0].pot = Pot::Two; // pot One: 8 teams, pot Two: 10
    assert_eq!(
        draw_league_phase(&teams, &round_dates()),
        Err(DrawError::WrongPotSize {
            pot: Pot::One,
            expected: POT_SIZE,
            actual: POT_SIZE - 1,
        })
    );
}

#[test]
fn duplicate_team_id_rejected() {
    let mut teams = spread_roster();
    teams[1].id = teams[0].id;
    assert_eq!(
        draw_league_phase(&teams, &round_dates()),
        Err(DrawError::DuplicateTeamId(teams[0].id))
    );
}

#[test]
fn start_level_unconstrained_still_schedules() {
    let teams = spread_roster();
    let dates = round_dates();
    let options = DrawOptions {
        start_level: ConstraintLevel::Unconstrained,
        ..DrawOptions::default()
    };
    let fixtures = draw_league_phase_with(
        &teams,
        &dates,
        &options,
        &NoopDiagnostics,
        &mut StdRng::seed_from_u64(3),
    )
    .unwrap();
    assert_valid_schedule(&teams, &fixtures, &dates);
}

#[test]
fn start_level_circle_fallback_is_complete() {
    let teams = spread_roster();
    let dates = round_dates();
    let options = DrawOptions {
        start_level: ConstraintLevel::CircleFallback,
        ..DrawOptions::default()
    };
    let fixtures = draw_league_phase_with(
        &teams,
        &dates,
        &options,
        &NoopDiagnostics,
        &mut StdRng::seed_from_u64(4),
    )
    .unwrap();
    assert_valid_schedule(&teams, &fixtures, &dates);
}

#[test]
fn orientation_balances_an_even_degree_graph() {
    // K5: every vertex has degree 4, so each must end up with 2 out / 2 in.
    let mut edges = Vec::new();
    for a in 0..5 {
        for b in (a + 1)..5 {
            edges.push(Pairing::new(a, b));
        }
    }
    let directed = orient_edges(5, &edges);
    assert_eq!(directed.len(), edges.len());

    let mut out_degree = [0usize; 5];
    let mut in_degree = [0usize; 5];
    for (from, to) in directed {
        out_degree[from] += 1;
        in_degree[to] += 1;
    }
    assert_eq!(out_degree, [2; 5]);
    assert_eq!(in_degree, [2; 5]);
}

#[test]
fn circle_rotations_are_disjoint_perfect_matchings() {
    let rounds = circle_method_rounds(TEAM_COUNT, MATCHDAY_COUNT, &mut StdRng::seed_from_u64(5));
    assert_eq!(rounds.len(), MATCHDAY_COUNT);

    let mut seen: HashSet<Pairing> = HashSet::new();
    for round in &rounds {
        assert_eq!(round.len(), MATCHES_PER_MATCHDAY);
        let mut covered: HashSet<usize> = HashSet::new();
        for &pair in round {
            assert_ne!(pair.lo, pair.hi);
            assert!(seen.insert(pair), "pairing produced by two rotations");
            assert!(covered.insert(pair.lo));
            assert!(covered.insert(pair.hi));
        }
        assert_eq!(covered.len(), TEAM_COUNT);
    }
    assert_eq!(seen.len(), FIXTURE_COUNT);
}

#[test]
fn round_scheduling_factorizes_a_full_pairing_set() {
    let mut rng = StdRng::seed_from_u64(6);
    let rounds = circle_method_rounds(TEAM_COUNT, MATCHDAY_COUNT, &mut rng);
    let edges: Vec<Pairing> = rounds.into_iter().flatten().collect();
    let directed = orient_edges(TEAM_COUNT, &edges);

    let schedule = schedule_rounds(TEAM_COUNT, &directed, MATCHDAY_COUNT, &mut rng)
        .expect("a 1-factorizable pairing set must schedule");
    assert_eq!(schedule.len(), MATCHDAY_COUNT);

    let mut assigned: HashSet<usize> = HashSet::new();
    for round in &schedule {
        assert_eq!(round.len(), MATCHES_PER_MATCHDAY);
        let mut covered: HashSet<usize> = HashSet::new();
        for &m in round {
            assert!(assigned.insert(m), "match assigned to two rounds");
            let (home, away) = directed[m];
            assert!(covered.insert(home));
            assert!(covered.insert(away));
        }
        assert_eq!(covered.len(), TEAM_COUNT);
    }
}
