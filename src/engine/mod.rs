//! High-level operations: the query engine and network statistics.

pub mod query;
pub mod stats;

pub use query::{
    FriendList, FriendScore, MutualList, Profile, QueryEngine, Separation, Suggestion,
    Suggestions, UserSummary,
};
pub use stats::NetworkStats;
