//! Edge orientation: turn an even-degree pairing set into directed matches
//! with every vertex sending out exactly half of its edges.
//!
//! An even-degree graph has an Euler circuit in each connected component.
//! Orienting every edge along the traversal direction gives each vertex equal
//! in- and out-degree, which for degree 8 is the required 4 home / 4 away
//! split. Vertices are dense integer indices; there are no team semantics
//! here.

use crate::logic::Pairing;

/// Orient `edges` along Euler circuits of the graph on `vertex_count` vertices.
///
/// Iterative Hierholzer construction: walk unused edges from the current
/// vertex, pushing visited vertices on a stack; when stuck, pop onto the
/// circuit, which splices sub-circuits in as the stack unwinds. Consecutive
/// circuit vertices become one directed (home, away) match.
///
/// Every vertex must have even degree; given that, all edges are consumed and
/// the function cannot fail.
pub fn orient_edges(vertex_count: usize, edges: &[Pairing]) -> Vec<(usize, usize)> {
    let mut adjacency: Vec<Vec<(usize, usize)>> = vec![Vec::new(); vertex_count];
    for (id, edge) in edges.iter().enumerate() {
        adjacency[edge.lo].push((edge.hi, id));
        adjacency[edge.hi].push((edge.lo, id));
    }

    let mut used = vec![false; edges.len()];
    // Per-vertex cursor into its adjacency list; entries behind the cursor are
    // all used, so each edge is inspected a bounded number of times.
    let mut cursor = vec![0usize; vertex_count];
    let mut directed = Vec::with_capacity(edges.len());

    for start in 0..vertex_count {
        skip_used(&adjacency, &used, &mut cursor, start);
        if cursor[start] == adjacency[start].len() {
            continue; // no unused edges left at this vertex
        }

        let mut stack = vec![start];
        let mut circuit: Vec<usize> = Vec::new();
        while let Some(&vertex) = stack.last() {
            skip_used(&adjacency, &used, &mut cursor, vertex);
            if cursor[vertex] < adjacency[vertex].len() {
                let (next, id) = adjacency[vertex][cursor[vertex]];
                used[id] = true;
                stack.push(next);
            } else {
                circuit.push(vertex);
                stack.pop();
            }
        }

        // circuit holds this component's Euler circuit (reversed, which is
        // still a circuit); consecutive vertices are the directed matches.
        for pair in circuit.windows(2) {
            directed.push((pair[0], pair[1]));
        }
    }

    directed
}

fn skip_used(
    adjacency: &[Vec<(usize, usize)>],
    used: &[bool],
    cursor: &mut [usize],
    vertex: usize,
) {
    while cursor[vertex] < adjacency[vertex].len() && used[adjacency[vertex][cursor[vertex]].1] {
        cursor[vertex] += 1;
    }
}
