//! Social graph: an in-memory friendship network with query operations.
//!
//! Users and their bidirectional friendships are loaded once into a
//! read-only [`SocialGraph`]. The [`QueryEngine`] answers profile, friend,
//! mutual-friend, separation, suggestion, friend-score and head-count queries
//! against it, and the [`cli`] module drives those queries from a
//! line-oriented command language.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use cli::{Command, CommandRunner, Outcome, OutputFormat, RunSummary};
pub use config::{load_config, CountryTable, NetworkConfig};
pub use engine::{
    FriendList, FriendScore, MutualList, NetworkStats, Profile, QueryEngine, Separation,
    Suggestion, Suggestions, UserSummary,
};
pub use format::NetworkReader;
pub use graph::{bfs_distance, bfs_levels, GraphBuilder, SocialGraph};
pub use types::{
    Friendship, SocialError, SocialResult, User, UserBuilder, UserHandle, PROXIMITY_BONUS,
    SCORE_DEPTH_CAP, SUGGESTION_DEPTH, SUGGESTION_LIMIT,
};
