//! Circle-method fixture generation: the classic round-robin rotation scheme,
//! used as the guaranteed fallback when the constrained draw keeps failing.

use crate::logic::Pairing;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pairings of one rotation step: the fixed team plays the rotation head, and
/// the remaining positions pair off symmetrically around it. Every step yields
/// `team_count / 2` disjoint pairs covering all teams, and each unordered pair
/// occurs in exactly one of the `team_count - 1` steps.
fn rotation_pairs(team_count: usize, step: usize) -> Vec<Pairing> {
    let rotating = team_count - 1;
    let mut pairs = Vec::with_capacity(team_count / 2);
    pairs.push(Pairing::new(team_count - 1, step));
    for offset in 1..team_count / 2 {
        let a = (step + offset) % rotating;
        let b = (step + rotating - offset) % rotating;
        pairs.push(Pairing::new(a, b));
    }
    pairs
}

/// Select `round_count` distinct rotation steps at random and return their
/// pairings; the position in the returned list is the matchday order. Distinct
/// steps never repeat a pairing, so the result is always conflict-free.
///
/// `team_count` must be even.
pub fn circle_method_rounds(
    team_count: usize,
    round_count: usize,
    rng: &mut impl Rng,
) -> Vec<Vec<Pairing>> {
    let mut steps: Vec<usize> = (0..team_count - 1).collect();
    steps.shuffle(rng);
    steps.truncate(round_count);
    steps
        .into_iter()
        .map(|step| rotation_pairs(team_count, step))
        .collect()
}
