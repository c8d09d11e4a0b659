//! Round scheduling: partition the matches into perfect matchings, one per
//! matchday (a 1-factorization of the pairing graph).

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// Full-schedule attempts before giving up on a pairing set.
pub const SCHEDULE_ATTEMPTS: u32 = 50;

/// Split `matches` into `round_count` rounds so that every round is a perfect
/// matching over all `vertex_count` teams. Direction is ignored here; matches
/// are partitioned by their endpoints.
///
/// Returns per-round lists of indices into `matches`, or `None` when no
/// attempt produced a complete schedule. Each attempt builds the rounds one by
/// one from the not-yet-assigned pool; a round that cannot be completed fails
/// the whole attempt, and the next attempt starts over with fresh
/// randomization.
pub fn schedule_rounds(
    vertex_count: usize,
    matches: &[(usize, usize)],
    round_count: usize,
    rng: &mut impl Rng,
) -> Option<Vec<Vec<usize>>> {
    for _ in 0..SCHEDULE_ATTEMPTS {
        if let Some(rounds) = try_schedule(vertex_count, matches, round_count, rng) {
            return Some(rounds);
        }
    }
    None
}

fn try_schedule(
    vertex_count: usize,
    matches: &[(usize, usize)],
    round_count: usize,
    rng: &mut impl Rng,
) -> Option<Vec<Vec<usize>>> {
    let mut assigned = vec![false; matches.len()];
    let mut rounds = Vec::with_capacity(round_count);
    for _ in 0..round_count {
        let pool: Vec<usize> = (0..matches.len()).filter(|&m| !assigned[m]).collect();
        let round = build_round(vertex_count, matches, &pool, rng)?;
        for &m in &round {
            assigned[m] = true;
        }
        rounds.push(round);
    }
    Some(rounds)
}

/// Build one perfect matching from the pool: greedy pass over the shuffled
/// pairings, then augmenting-path repair for every team left unmatched.
fn build_round(
    vertex_count: usize,
    matches: &[(usize, usize)],
    pool: &[usize],
    rng: &mut impl Rng,
) -> Option<Vec<usize>> {
    let mut pool = pool.to_vec();
    pool.shuffle(rng);

    // matched_edge[v]: the pool match currently covering v in this round.
    let mut matched_edge: Vec<Option<usize>> = vec![None; vertex_count];
    for &edge in &pool {
        let (a, b) = matches[edge];
        if matched_edge[a].is_none() && matched_edge[b].is_none() {
            matched_edge[a] = Some(edge);
            matched_edge[b] = Some(edge);
        }
    }

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); vertex_count];
    for &edge in &pool {
        let (a, b) = matches[edge];
        adjacency[a].push(edge);
        adjacency[b].push(edge);
    }

    for vertex in 0..vertex_count {
        if matched_edge[vertex].is_none() {
            augment_from(vertex, matches, &adjacency, &mut matched_edge)?;
        }
    }

    let mut round: Vec<usize> = matched_edge.iter().filter_map(|&edge| edge).collect();
    round.sort_unstable();
    round.dedup();
    Some(round)
}

/// Grow the matching by one pair: breadth-first search for an alternating path
/// from the free vertex `start` to another free vertex, stepping over an
/// unused edge and back through a matched edge in turn, then flip every edge
/// along the path. Returns `None` when no augmenting path exists.
fn augment_from(
    start: usize,
    matches: &[(usize, usize)],
    adjacency: &[Vec<usize>],
    matched_edge: &mut [Option<usize>],
) -> Option<()> {
    let vertex_count = adjacency.len();
    let mut seen_outer = vec![false; vertex_count];
    let mut seen_inner = vec![false; vertex_count];
    // For an outer vertex p (reached through its matched edge): the unused
    // edge taken from the previous outer vertex, that vertex, and p's partner.
    let mut reached_by: Vec<Option<(usize, usize, usize)>> = vec![None; vertex_count];

    let mut queue = VecDeque::new();
    seen_outer[start] = true;
    queue.push_back(start);

    while let Some(outer) = queue.pop_front() {
        for &edge in &adjacency[outer] {
            let other = other_end(matches[edge], outer);
            if matched_edge[other] == Some(edge) {
                continue; // matched edges are only walked partner-to-partner
            }
            if seen_inner[other] || seen_outer[other] {
                continue;
            }
            match matched_edge[other] {
                None => {
                    // Second free vertex reached: the path augments.
                    flip_path(start, outer, edge, other, &reached_by, matched_edge);
                    return Some(());
                }
                Some(matched) => {
                    seen_inner[other] = true;
                    let partner = other_end(matches[matched], other);
                    if !seen_outer[partner] {
                        seen_outer[partner] = true;
                        reached_by[partner] = Some((edge, outer, other));
                        queue.push_back(partner);
                    }
                }
            }
        }
    }

    None
}

/// Toggle matched/unmatched status along the alternating path, walking the
/// `reached_by` chain back from the endpoint to `start`.
fn flip_path(
    start: usize,
    mut outer: usize,
    mut edge: usize,
    mut inner: usize,
    reached_by: &[Option<(usize, usize, usize)>],
    matched_edge: &mut [Option<usize>],
) {
    loop {
        matched_edge[inner] = Some(edge);
        matched_edge[outer] = Some(edge);
        if outer == start {
            return;
        }
        let Some((previous_edge, previous_outer, previous_inner)) = reached_by[outer] else {
            return; // unreachable: every non-start outer vertex was recorded
        };
        outer = previous_outer;
        edge = previous_edge;
        inner = previous_inner;
    }
}

fn other_end((a, b): (usize, usize), vertex: usize) -> usize {
    if vertex == a {
        b
    } else {
        a
    }
}
