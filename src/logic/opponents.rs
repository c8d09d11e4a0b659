//! Opponent assignment: give every team 2 opponents from each pot, at random,
//! under the optional country constraints.

use crate::logic::Pairing;
use rand::seq::SliceRandom;
use rand::Rng;

/// Opponents each team draws from every pot.
pub const OPPONENTS_PER_POT: usize = 2;

/// Pot and country of one roster slot, by dense index. Countries are interned
/// to indices by the caller; the assigner never sees team semantics.
#[derive(Clone, Copy, Debug)]
pub struct TeamInfo {
    /// Pot index, 0..4.
    pub pot: usize,
    /// Interned country index.
    pub country: usize,
}

/// Shared pairing counters. Every accepted pairing updates both teams at once,
/// so a team's quota can fill up as a side effect of other teams' picks.
struct AssignmentState {
    /// paired[a][b]: a and b already meet.
    paired: Vec<Vec<bool>>,
    /// per_pot[t][p]: opponents t has acquired from pot p.
    per_pot: Vec<[u8; 4]>,
    /// per_country[t][c]: opponents t has acquired from country c.
    per_country: Vec<Vec<u8>>,
    pairings: Vec<Pairing>,
}

impl AssignmentState {
    fn new(team_count: usize, country_count: usize) -> Self {
        Self {
            paired: vec![vec![false; team_count]; team_count],
            per_pot: vec![[0; 4]; team_count],
            per_country: vec![vec![0; country_count]; team_count],
            pairings: Vec::with_capacity(team_count * OPPONENTS_PER_POT * 4 / 2),
        }
    }

    /// Can `candidate` become an opponent of `team`?
    fn eligible(
        &self,
        team: usize,
        candidate: usize,
        teams: &[TeamInfo],
        country_protection: bool,
        max_country_opponents: u32,
    ) -> bool {
        if candidate == team || self.paired[team][candidate] {
            return false;
        }
        // The candidate must still need an opponent from `team`'s pot,
        // otherwise the pick would overfill its quota there.
        if usize::from(self.per_pot[candidate][teams[team].pot]) >= OPPONENTS_PER_POT {
            return false;
        }
        let team_country = teams[team].country;
        let candidate_country = teams[candidate].country;
        if country_protection && team_country == candidate_country {
            return false;
        }
        if max_country_opponents > 0 && team_country != candidate_country {
            // Cap applies to foreign countries, in both directions.
            if u32::from(self.per_country[team][candidate_country]) >= max_country_opponents {
                return false;
            }
            if u32::from(self.per_country[candidate][team_country]) >= max_country_opponents {
                return false;
            }
        }
        true
    }

    /// Record a pairing, updating both teams' counters together.
    fn record(&mut self, a: usize, b: usize, teams: &[TeamInfo]) {
        self.paired[a][b] = true;
        self.paired[b][a] = true;
        self.per_pot[a][teams[b].pot] += 1;
        self.per_pot[b][teams[a].pot] += 1;
        self.per_country[a][teams[b].country] += 1;
        self.per_country[b][teams[a].country] += 1;
        self.pairings.push(Pairing::new(a, b));
    }
}

/// Assign [`OPPONENTS_PER_POT`] opponents per pot to every team.
///
/// 1. Shuffle the team processing order.
/// 2. For each team and pot, count how many opponents are still needed there
///    (picks by earlier teams may have filled part of the quota already).
/// 3. Draw the remaining picks one at a time from the eligible candidates in
///    that pot; each pick can change later eligibility, so the candidate list
///    is re-filtered per pick.
///
/// Returns `None` as soon as some pick has no eligible candidate left. This is
/// a heuristic: bidirectional accumulation can starve later picks, and the
/// caller is expected to retry with fresh randomization.
pub fn assign_opponents(
    teams: &[TeamInfo],
    country_protection: bool,
    max_country_opponents: u32,
    rng: &mut impl Rng,
) -> Option<Vec<Pairing>> {
    let country_count = teams.iter().map(|t| t.country + 1).max().unwrap_or(0);
    let mut state = AssignmentState::new(teams.len(), country_count);

    let mut pots: [Vec<usize>; 4] = Default::default();
    for (index, team) in teams.iter().enumerate() {
        pots[team.pot].push(index);
    }

    let mut order: Vec<usize> = (0..teams.len()).collect();
    order.shuffle(rng);

    for &team in &order {
        for (pot, members) in pots.iter().enumerate() {
            let needed =
                OPPONENTS_PER_POT.saturating_sub(usize::from(state.per_pot[team][pot]));
            for _ in 0..needed {
                let candidates: Vec<usize> = members
                    .iter()
                    .copied()
                    .filter(|&candidate| {
                        state.eligible(
                            team,
                            candidate,
                            teams,
                            country_protection,
                            max_country_opponents,
                        )
                    })
                    .collect();
                let &pick = candidates.choose(rng)?;
                state.record(team, pick, teams);
            }
        }
    }

    Some(state.pairings)
}
