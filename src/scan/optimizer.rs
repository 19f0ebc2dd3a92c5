//! Exact shortest open-path search over a point set.
//!
//! The optimizer enumerates every ordering of the input points and keeps the
//! one with the smallest total travel distance. This is exact, not a
//! heuristic: the returned length is guaranteed minimal over all N!
//! permutations. The cost is factorial, which bounds practical point counts
//! to roughly N <= 10; beyond that, an exact Held-Karp bitmask solver
//! (O(N^2 * 2^N)) is the contract-compatible replacement.
//!
//! Orderings are enumerated lexicographically over input indices, and the
//! first minimal ordering encountered wins, so results are deterministic for
//! a given input order.

use crate::scan::point::Point;

/// Total length of an open path: the sum of Euclidean distances between
/// consecutive points. Empty and single-point paths have length 0.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Find the ordering of `points` minimizing total open-path length.
///
/// Returns the reordered points and the minimal length. The path is open:
/// there is no return edge to the first point. Coincident duplicate points
/// are valid and contribute zero-length edges.
///
/// Runs in O(N!) time; see the module docs for the scalability ceiling.
pub fn optimal_path(points: &[Point]) -> (Vec<Point>, f64) {
    if points.len() <= 1 {
        return (points.to_vec(), 0.0);
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    let mut best_order = order.clone();
    let mut best_length = order_length(points, &order);

    while next_permutation(&mut order) {
        let length = order_length(points, &order);
        // Strict comparison keeps the first minimal ordering found.
        if length < best_length {
            best_length = length;
            best_order.copy_from_slice(&order);
        }
    }

    let path = best_order.iter().map(|&i| points[i]).collect();
    (path, best_length)
}

fn order_length(points: &[Point], order: &[usize]) -> f64 {
    order
        .windows(2)
        .map(|w| points[w[0]].distance_to(&points[w[1]]))
        .sum()
}

/// Advance `order` to its lexicographic successor in place. Returns false
/// once the final (descending) permutation has been passed.
fn next_permutation(order: &mut [usize]) -> bool {
    if order.len() < 2 {
        return false;
    }

    let mut i = order.len() - 1;
    while i > 0 && order[i - 1] >= order[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = order.len() - 1;
    while order[j] <= order[i - 1] {
        j -= 1;
    }
    order.swap(i - 1, j);
    order[i..].reverse();
    true
}
