//! Whole-network statistics.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::graph::traversal::component_of;
use crate::graph::SocialGraph;

/// Summary of a loaded network.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkStats {
    pub users: usize,
    pub friendships: usize,
    pub avg_friends: f64,
    pub max_friends: usize,
    /// Users with no friends at all.
    pub isolated: usize,
    /// Number of connected components.
    pub components: usize,
    /// Size of the largest connected component.
    pub largest_component: usize,
    /// Users per country code.
    pub countries: BTreeMap<String, usize>,
}

impl NetworkStats {
    /// Compute statistics for a graph.
    pub fn collect(graph: &SocialGraph) -> Self {
        let users = graph.user_count();
        let degrees: Vec<usize> = graph.handles().map(|h| graph.degree(h)).collect();
        let avg_friends = if users > 0 {
            degrees.iter().sum::<usize>() as f64 / users as f64
        } else {
            0.0
        };

        let mut seen = HashSet::new();
        let mut components = 0;
        let mut largest_component = 0;
        for handle in graph.handles() {
            if seen.contains(&handle) {
                continue;
            }
            let component = component_of(graph, handle);
            components += 1;
            largest_component = largest_component.max(component.len());
            seen.extend(component);
        }

        let mut countries = BTreeMap::new();
        for user in graph.users() {
            *countries.entry(user.country_code.clone()).or_insert(0) += 1;
        }

        Self {
            users,
            friendships: graph.friendship_count(),
            avg_friends,
            max_friends: degrees.iter().copied().max().unwrap_or(0),
            isolated: degrees.iter().filter(|&&d| d == 0).count(),
            components,
            largest_component,
            countries,
        }
    }
}
