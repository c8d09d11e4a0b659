//! Demo binary: draw a sample 36-team league phase and print the fixture list
//! as JSON on stdout.
//! Run with: cargo run --bin draw
//! Set RUST_LOG=debug to see escalation diagnostics if the draw has to relax
//! constraints.

use chrono::NaiveDate;
use league_draw::{
    draw_league_phase_with, DrawOptions, LogDiagnostics, Pot, Team, MATCHDAY_COUNT, POT_SIZE,
};

const COUNTRIES: [&str; 12] = [
    "ENG", "ESP", "GER", "ITA", "FRA", "POR", "NED", "SCO", "AUT", "BEL", "TUR", "CZE",
];

/// 36 sample teams: 12 countries, 3 teams each, spread so no country appears
/// twice in the same pot.
fn sample_roster() -> Vec<Team> {
    let mut teams = Vec::with_capacity(POT_SIZE * Pot::ALL.len());
    for (pot_index, pot) in Pot::ALL.into_iter().enumerate() {
        for slot in 0..POT_SIZE {
            let country = COUNTRIES[(pot_index * POT_SIZE + slot) % COUNTRIES.len()];
            let name = format!("{} {}", country, pot_index * POT_SIZE + slot + 1);
            teams.push(Team::new(name, pot, country));
        }
    }
    teams
}

/// Eight matchday dates, two weeks apart from a fixed season start.
fn season_dates() -> [NaiveDate; MATCHDAY_COUNT] {
    let start = NaiveDate::from_ymd_opt(2025, 9, 16).expect("valid season start");
    let mut dates = [start; MATCHDAY_COUNT];
    for (matchday, date) in dates.iter_mut().enumerate() {
        *date = start + chrono::Duration::weeks(2 * matchday as i64);
    }
    dates
}

fn main() {
    env_logger::init();

    let teams = sample_roster();
    let dates = season_dates();
    match draw_league_phase_with(
        &teams,
        &dates,
        &DrawOptions::default(),
        &LogDiagnostics,
        &mut rand::thread_rng(),
    ) {
        Ok(fixtures) => {
            log::info!("drew {} fixtures", fixtures.len());
            println!(
                "{}",
                serde_json::to_string_pretty(&fixtures).expect("fixtures serialize")
            );
        }
        Err(e) => {
            eprintln!("draw failed: {e}");
            std::process::exit(1);
        }
    }
}
