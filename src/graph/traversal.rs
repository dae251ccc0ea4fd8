//! Graph traversal algorithms (BFS).

use std::collections::{HashSet, VecDeque};

use crate::types::UserHandle;

use super::SocialGraph;

/// Shortest friendship distance from `start` to `target`.
///
/// Returns `Some(0)` when both are the same user. With `max_depth` set, the
/// search stops after that many hops and returns `None` if the target was not
/// found within it; without it the search is bounded only by the size of
/// `start`'s component.
pub fn bfs_distance(
    graph: &SocialGraph,
    start: UserHandle,
    target: UserHandle,
    max_depth: Option<u32>,
) -> Option<u32> {
    if start == target {
        return Some(0);
    }

    let mut visited: HashSet<UserHandle> = HashSet::with_capacity(graph.user_count());
    let mut queue: VecDeque<(UserHandle, u32)> = VecDeque::new();

    visited.insert(start);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }

        for &neighbor in graph.neighbors(current) {
            if neighbor == target {
                return Some(depth + 1);
            }
            if visited.insert(neighbor) {
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    None
}

/// Every user reachable from `start` within `max_depth` hops, excluding
/// `start` itself, paired with the depth at which BFS first found it.
///
/// Results are in BFS order, so depths are non-decreasing.
pub fn bfs_levels(
    graph: &SocialGraph,
    start: UserHandle,
    max_depth: u32,
) -> Vec<(UserHandle, u32)> {
    let mut visited: HashSet<UserHandle> = HashSet::new();
    let mut discovered: Vec<(UserHandle, u32)> = Vec::new();
    let mut queue: VecDeque<(UserHandle, u32)> = VecDeque::new();

    visited.insert(start);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for &neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                discovered.push((neighbor, depth + 1));
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    discovered
}

/// Users in the same connected component as `start`, including `start`.
pub fn component_of(graph: &SocialGraph, start: UserHandle) -> Vec<UserHandle> {
    let mut component = vec![start];
    component.extend(
        bfs_levels(graph, start, u32::MAX)
            .into_iter()
            .map(|(handle, _)| handle),
    );
    component
}
