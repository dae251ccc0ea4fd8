//! Fluent API for building SocialGraph instances.

use crate::types::{Friendship, User, UserBuilder};

use super::SocialGraph;

/// Fluent builder for constructing a SocialGraph.
#[derive(Default)]
pub struct GraphBuilder {
    users: Vec<User>,
    friendships: Vec<Friendship>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully specified user.
    pub fn add_user(&mut self, user: User) -> &mut Self {
        self.users.push(user);
        self
    }

    /// Add several users at once.
    pub fn add_users(&mut self, users: impl IntoIterator<Item = User>) -> &mut Self {
        self.users.extend(users);
        self
    }

    /// Add a user named after its id, with the given country and activity rate.
    pub fn add_member(&mut self, id: &str, country: &str, activity_rate: f64) -> &mut Self {
        let user = UserBuilder::new(id)
            .country(country)
            .activity_rate(activity_rate)
            .build();
        self.add_user(user)
    }

    /// Record a friendship between two user ids.
    pub fn link(&mut self, a: &str, b: &str) -> &mut Self {
        self.friendships.push(Friendship::new(a, b));
        self
    }

    /// Record several friendships.
    pub fn add_friendships(
        &mut self,
        friendships: impl IntoIterator<Item = Friendship>,
    ) -> &mut Self {
        self.friendships.extend(friendships);
        self
    }

    /// Build the final SocialGraph.
    pub fn build(self) -> SocialGraph {
        SocialGraph::from_parts(self.users, self.friendships)
    }
}
