//! Core graph structure: a user arena with symmetric adjacency sets.

use std::collections::{HashMap, HashSet};

use crate::types::{Friendship, User, UserHandle};

/// The in-memory social graph: users plus their friendships.
///
/// Built once (by [`GraphBuilder`](super::GraphBuilder) or the loader) and
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct SocialGraph {
    /// All users, indexed by handle.
    users: Vec<User>,
    /// Identifier -> handle.
    index: HashMap<String, UserHandle>,
    /// Adjacency sets, parallel to `users`.
    adjacency: Vec<HashSet<UserHandle>>,
    /// Number of distinct undirected friendships.
    friendship_count: usize,
}

impl SocialGraph {
    /// Create from pre-existing records.
    ///
    /// A repeated user id replaces the earlier record. Friendships naming an
    /// unknown user, or the same user twice, are dropped.
    pub fn from_parts(users: Vec<User>, friendships: Vec<Friendship>) -> Self {
        let mut graph = Self::default();

        for user in users {
            match graph.index.get(&user.id) {
                Some(&handle) => {
                    log::warn!("Duplicate user id {:?}, keeping the later record", user.id);
                    graph.users[handle.index()] = user;
                }
                None => {
                    let handle = UserHandle(graph.users.len());
                    graph.index.insert(user.id.clone(), handle);
                    graph.users.push(user);
                    graph.adjacency.push(HashSet::new());
                }
            }
        }

        let mut dropped = 0usize;
        for friendship in &friendships {
            if !graph.insert_friendship(friendship) {
                dropped += 1;
            }
        }

        log::debug!(
            "Built graph: {} users, {} friendships ({} records dropped)",
            graph.users.len(),
            graph.friendship_count,
            dropped
        );

        graph
    }

    /// Link both ends symmetrically. Returns false if the record was dropped.
    fn insert_friendship(&mut self, friendship: &Friendship) -> bool {
        if friendship.is_self_loop() {
            log::trace!("Dropping self-friendship {}", friendship);
            return false;
        }
        let (Some(&a), Some(&b)) = (self.index.get(&friendship.a), self.index.get(&friendship.b))
        else {
            log::trace!("Dropping friendship with unknown user: {}", friendship);
            return false;
        };

        // Duplicates are idempotent but still count as accepted.
        if self.adjacency[a.index()].insert(b) {
            self.adjacency[b.index()].insert(a);
            self.friendship_count += 1;
        }
        true
    }

    /// Number of users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of distinct friendships.
    pub fn friendship_count(&self) -> usize {
        self.friendship_count
    }

    /// Look up a user by identifier.
    pub fn lookup(&self, id: &str) -> Option<&User> {
        self.handle(id).map(|h| self.user(h))
    }

    /// Resolve an identifier to its handle.
    pub fn handle(&self, id: &str) -> Option<UserHandle> {
        self.index.get(id).copied()
    }

    /// Get the user behind a handle issued by this graph.
    pub fn user(&self, handle: UserHandle) -> &User {
        &self.users[handle.index()]
    }

    /// Direct friends of a user.
    pub fn neighbors(&self, handle: UserHandle) -> &HashSet<UserHandle> {
        &self.adjacency[handle.index()]
    }

    /// Number of direct friends.
    pub fn degree(&self, handle: UserHandle) -> usize {
        self.adjacency[handle.index()].len()
    }

    /// Iterate the friends of a user by identifier. Empty for unknown ids.
    pub fn friends_of<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a User> + 'a {
        self.handle(id)
            .into_iter()
            .flat_map(move |h| self.neighbors(h).iter().map(move |&f| self.user(f)))
    }

    /// True if the two users are direct friends.
    pub fn are_friends(&self, a: UserHandle, b: UserHandle) -> bool {
        self.adjacency[a.index()].contains(&b)
    }

    /// Friends shared by two users.
    ///
    /// Iterates the smaller adjacency set and probes the larger one.
    pub fn mutual_friends(&self, a: UserHandle, b: UserHandle) -> Vec<UserHandle> {
        let (small, large) = self.smaller_first(a, b);
        small.iter().filter(|f| large.contains(f)).copied().collect()
    }

    /// Number of friends shared by two users, without allocating.
    pub fn mutual_count(&self, a: UserHandle, b: UserHandle) -> usize {
        let (small, large) = self.smaller_first(a, b);
        small.iter().filter(|f| large.contains(f)).count()
    }

    fn smaller_first(
        &self,
        a: UserHandle,
        b: UserHandle,
    ) -> (&HashSet<UserHandle>, &HashSet<UserHandle>) {
        let (sa, sb) = (self.neighbors(a), self.neighbors(b));
        if sa.len() <= sb.len() {
            (sa, sb)
        } else {
            (sb, sa)
        }
    }

    /// All users, in load order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All handles, in load order.
    pub fn handles(&self) -> impl Iterator<Item = UserHandle> {
        (0..self.users.len()).map(UserHandle)
    }
}
