//! Friendship records as read from the friendship file.

use serde::Serialize;

/// An undirected friendship between two users, referenced by identifier.
///
/// Records are unchecked: either side may name an unknown user, and both
/// sides may be the same. The graph builder drops such records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Friendship {
    /// One end of the friendship.
    pub a: String,
    /// The other end.
    pub b: String,
}

impl Friendship {
    /// Create a friendship record.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// True if both ends name the same user.
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

impl std::fmt::Display for Friendship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <-> {}", self.a, self.b)
    }
}
