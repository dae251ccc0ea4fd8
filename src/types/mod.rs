//! All data types for the social graph library.

pub mod error;
pub mod friendship;
pub mod user;

pub use error::{SocialError, SocialResult};
pub use friendship::Friendship;
pub use user::{User, UserBuilder, UserHandle};

/// Maximum number of suggestions returned by a suggestion query.
pub const SUGGESTION_LIMIT: usize = 5;

/// Deepest BFS level searched for friend suggestions.
pub const SUGGESTION_DEPTH: u32 = 2;

/// Deepest BFS level searched when computing a friend score.
/// Unreached pairs are scored as if separated by this many hops.
pub const SCORE_DEPTH_CAP: u32 = 6;

/// Proximity bonus numerator, divided by the separation. A user scored
/// against themself receives it undivided.
pub const PROXIMITY_BONUS: f64 = 720.0;
