//! Query executor for every query type.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::CountryTable;
use crate::graph::traversal::{bfs_distance, bfs_levels};
use crate::graph::SocialGraph;
use crate::types::{
    SocialError, SocialResult, User, UserHandle, PROXIMITY_BONUS, SCORE_DEPTH_CAP,
    SUGGESTION_DEPTH, SUGGESTION_LIMIT,
};

/// A user's identifier and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
        }
    }
}

/// Display attributes of a single user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub country_code: String,
    /// Country display name, or the code when the table does not know it.
    pub country: String,
    /// Activity rate as a rounded whole percentage.
    pub activity_percent: i64,
    pub friend_count: usize,
}

/// Result of a friend listing.
#[derive(Debug, Clone, Serialize)]
pub struct FriendList {
    pub count: usize,
    /// Direct friends, in no particular order.
    pub friends: Vec<UserSummary>,
}

/// Result of a mutual friend listing.
#[derive(Debug, Clone, Serialize)]
pub struct MutualList {
    pub count: usize,
    pub mutuals: Vec<UserSummary>,
}

/// Outcome of a separation search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "degrees", rename_all = "snake_case")]
pub enum Separation {
    /// Shortest path length in friendships.
    Degrees(u32),
    /// The users are in different components.
    NoConnection,
}

impl Separation {
    /// The distance, if connected.
    pub fn degrees(self) -> Option<u32> {
        match self {
            Self::Degrees(d) => Some(d),
            Self::NoConnection => None,
        }
    }
}

/// A single ranked friend suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    /// Friends shared with the user the suggestion is for.
    pub mutual_count: usize,
    /// BFS depth at which the candidate was found.
    pub depth: u32,
    pub score: f64,
}

/// Result of a suggestion query.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestions {
    /// Number of candidates that qualified, before truncation.
    pub total: usize,
    /// The best candidates, at most [`SUGGESTION_LIMIT`].
    pub suggestions: Vec<Suggestion>,
}

/// Result of a friend score query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FriendScore {
    pub score: f64,
    /// Shared friends (the friend count when a user is scored against themself).
    pub mutual_count: usize,
    /// Separation used for the proximity bonus, capped at [`SCORE_DEPTH_CAP`].
    pub separation: u32,
}

/// The query engine supports all query operations.
///
/// Holds no per-query state; every operation reads the graph it is given.
pub struct QueryEngine {
    countries: CountryTable,
}

impl QueryEngine {
    /// Create a query engine with the built-in country table.
    pub fn new() -> Self {
        Self::with_countries(CountryTable::default())
    }

    /// Create a query engine that resolves country names through `countries`.
    pub fn with_countries(countries: CountryTable) -> Self {
        Self { countries }
    }

    /// The country table used by [`profile`](Self::profile).
    pub fn countries(&self) -> &CountryTable {
        &self.countries
    }

    /// View a user's profile.
    pub fn profile(&self, graph: &SocialGraph, id: &str) -> SocialResult<Profile> {
        let handle = require(graph, id)?;
        let user = graph.user(handle);
        Ok(Profile {
            id: user.id.clone(),
            name: user.name.clone(),
            age: user.age,
            country_code: user.country_code.clone(),
            country: self.countries.resolve(&user.country_code).to_string(),
            activity_percent: user.activity_percent(),
            friend_count: graph.degree(handle),
        })
    }

    /// List a user's direct friends.
    pub fn friends(&self, graph: &SocialGraph, id: &str) -> SocialResult<FriendList> {
        let handle = require(graph, id)?;
        let friends: Vec<UserSummary> = graph
            .neighbors(handle)
            .iter()
            .map(|&f| UserSummary::from(graph.user(f)))
            .collect();
        Ok(FriendList {
            count: friends.len(),
            friends,
        })
    }

    /// List the friends two users have in common.
    pub fn mutuals(
        &self,
        graph: &SocialGraph,
        id_a: &str,
        id_b: &str,
    ) -> SocialResult<MutualList> {
        let (a, b) = require_pair(graph, id_a, id_b)?;
        let mutuals: Vec<UserSummary> = graph
            .mutual_friends(a, b)
            .into_iter()
            .map(|f| UserSummary::from(graph.user(f)))
            .collect();
        Ok(MutualList {
            count: mutuals.len(),
            mutuals,
        })
    }

    /// Shortest friendship distance between two users, with no depth limit.
    pub fn separation(
        &self,
        graph: &SocialGraph,
        id_a: &str,
        id_b: &str,
    ) -> SocialResult<Separation> {
        let (a, b) = require_pair(graph, id_a, id_b)?;
        Ok(match bfs_distance(graph, a, b, None) {
            Some(d) => Separation::Degrees(d),
            None => Separation::NoConnection,
        })
    }

    /// Rank friends-of-friends the user is not yet connected to.
    ///
    /// Candidates are drawn from BFS depth <= [`SUGGESTION_DEPTH`], must
    /// share at least one friend, and are scored as
    /// `mutuals * rate(user) * rate(candidate) + 720 / depth`. Ranking is by
    /// descending score, then ascending name.
    pub fn suggest(&self, graph: &SocialGraph, id: &str) -> SocialResult<Suggestions> {
        let source = require(graph, id)?;
        let source_rate = graph.user(source).activity_rate;

        let mut ranked: Vec<Suggestion> = bfs_levels(graph, source, SUGGESTION_DEPTH)
            .into_iter()
            .filter(|&(candidate, _)| !graph.are_friends(source, candidate))
            .filter_map(|(candidate, depth)| {
                let mutual_count = graph.mutual_count(source, candidate);
                if mutual_count == 0 {
                    return None;
                }
                let user = graph.user(candidate);
                let score = mutual_count as f64 * source_rate * user.activity_rate
                    + PROXIMITY_BONUS / depth as f64;
                Some(Suggestion {
                    id: user.id.clone(),
                    name: user.name.clone(),
                    mutual_count,
                    depth,
                    score,
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });

        let total = ranked.len();
        ranked.truncate(SUGGESTION_LIMIT);
        log::trace!("Suggestions for {}: {} qualified", id, total);

        Ok(Suggestions {
            total,
            suggestions: ranked,
        })
    }

    /// Composite closeness of two users.
    ///
    /// `mutuals * rate(a) * rate(b) + 720 / separation`, where separation is
    /// searched up to [`SCORE_DEPTH_CAP`] hops and defaults to the cap.
    /// A user scored against themself gets
    /// `friend_count * rate^2 + 720`.
    pub fn friend_score(
        &self,
        graph: &SocialGraph,
        id_a: &str,
        id_b: &str,
    ) -> SocialResult<FriendScore> {
        let (a, b) = require_pair(graph, id_a, id_b)?;
        let (user_a, user_b) = (graph.user(a), graph.user(b));

        if a == b {
            let friend_count = graph.degree(a);
            let rate = user_a.activity_rate;
            return Ok(FriendScore {
                score: friend_count as f64 * rate * rate + PROXIMITY_BONUS,
                mutual_count: friend_count,
                separation: 0,
            });
        }

        let mutual_count = graph.mutual_count(a, b);
        let separation =
            bfs_distance(graph, a, b, Some(SCORE_DEPTH_CAP)).unwrap_or(SCORE_DEPTH_CAP);
        let score = mutual_count as f64 * user_a.activity_rate * user_b.activity_rate
            + PROXIMITY_BONUS / separation as f64;

        Ok(FriendScore {
            score,
            mutual_count,
            separation,
        })
    }

    /// Count users whose country code is in `countries`; all users if empty.
    pub fn total_users<S: AsRef<str>>(&self, graph: &SocialGraph, countries: &[S]) -> usize {
        if countries.is_empty() {
            return graph.user_count();
        }
        let filter: HashSet<&str> = countries.iter().map(AsRef::as_ref).collect();
        graph
            .users()
            .iter()
            .filter(|u| filter.contains(u.country_code.as_str()))
            .count()
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn require(graph: &SocialGraph, id: &str) -> SocialResult<UserHandle> {
    graph
        .handle(id)
        .ok_or_else(|| SocialError::UserNotFound(id.to_string()))
}

fn require_pair(
    graph: &SocialGraph,
    id_a: &str,
    id_b: &str,
) -> SocialResult<(UserHandle, UserHandle)> {
    Ok((require(graph, id_a)?, require(graph, id_b)?))
}
