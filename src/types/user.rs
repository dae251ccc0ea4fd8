//! User records and the handle type used to reference them inside a graph.

use serde::Serialize;

/// Opaque reference to a user stored in a [`SocialGraph`](crate::graph::SocialGraph).
///
/// Handles are indexes into the graph's user arena. They are only meaningful
/// for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct UserHandle(pub(crate) usize);

impl UserHandle {
    /// Position of the user in the graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for UserHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single member of the social network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// Unique identifier, as given in the user records.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Country code, e.g. "UK" or "US".
    pub country_code: String,
    /// Engagement weight, intended to lie in [0.0, 1.0] (not enforced).
    pub activity_rate: f64,
}

impl User {
    /// Create a user from its record fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: i32,
        country_code: impl Into<String>,
        activity_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            country_code: country_code.into(),
            activity_rate,
        }
    }

    /// Activity rate as a whole percentage: `rate * 100 + 0.5`, truncated
    /// toward zero.
    pub fn activity_percent(&self) -> i64 {
        (self.activity_rate * 100.0 + 0.5).trunc() as i64
    }
}

/// Builder for constructing User instances in tests and tooling.
pub struct UserBuilder {
    id: String,
    name: String,
    age: i32,
    country_code: String,
    activity_rate: f64,
}

impl UserBuilder {
    /// Start a user with the required identifier; the name defaults to the id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            age: 0,
            country_code: String::new(),
            activity_rate: 0.0,
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the age.
    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Set the country code.
    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.country_code = code.into();
        self
    }

    /// Set the activity rate.
    pub fn activity_rate(mut self, rate: f64) -> Self {
        self.activity_rate = rate;
        self
    }

    /// Build the User.
    pub fn build(self) -> User {
        User {
            id: self.id,
            name: self.name,
            age: self.age,
            country_code: self.country_code,
            activity_rate: self.activity_rate,
        }
    }
}
