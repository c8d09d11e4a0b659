//! Draw diagnostics: an injected sink for escalation events. Observability
//! only; nothing a sink does can alter or abort the draw.

use crate::models::ConstraintLevel;

/// Country distribution of each pot, reported when a constraint level is
/// abandoned: per pot, (country, team count) sorted by descending count.
pub type PotCountryDistribution = [Vec<(String, usize)>; 4];

/// Receiver for draw diagnostics. Every hook has a no-op default, so a sink
/// only implements what it cares about and the draw works with none at all.
pub trait DiagnosticSink {
    /// A constraint level was exhausted after `attempts` tries and the draw is
    /// escalating to the next rung of the ladder.
    fn constraint_level_abandoned(
        &self,
        level: ConstraintLevel,
        attempts: u32,
        pot_countries: &PotCountryDistribution,
    ) {
        let _ = (level, attempts, pot_countries);
    }
}

/// Default sink: ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopDiagnostics;

impl DiagnosticSink for NoopDiagnostics {}

/// Sink forwarding escalations to the `log` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn constraint_level_abandoned(
        &self,
        level: ConstraintLevel,
        attempts: u32,
        pot_countries: &PotCountryDistribution,
    ) {
        log::warn!("draw level {level:?} abandoned after {attempts} attempts, escalating");
        for (pot, countries) in pot_countries.iter().enumerate() {
            let summary: Vec<String> = countries
                .iter()
                .map(|(country, count)| format!("{country}:{count}"))
                .collect();
            log::debug!("pot {} countries: {}", pot + 1, summary.join(" "));
        }
    }
}
