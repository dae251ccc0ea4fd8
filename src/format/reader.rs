//! Reads user and friendship record files into an in-memory graph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::SocialGraph;
use crate::types::error::{SocialError, SocialResult};
use crate::types::{Friendship, User};

/// Reader for the comma-delimited network record files.
///
/// Users: `id,name,age,country,activity_rate`. Friendships: `id,id`.
pub struct NetworkReader;

impl NetworkReader {
    /// Read both record files into a SocialGraph.
    pub fn read_from_files(
        users_path: &Path,
        friendships_path: &Path,
    ) -> SocialResult<SocialGraph> {
        let users_file = File::open(users_path)?;
        let friendships_file = File::open(friendships_path)?;

        let users = Self::read_users(
            BufReader::new(users_file),
            &users_path.display().to_string(),
        )?;
        let friendships = Self::read_friendships(BufReader::new(friendships_file))?;

        log::debug!(
            "Read {} user records from {} and {} friendship records from {}",
            users.len(),
            users_path.display(),
            friendships.len(),
            friendships_path.display()
        );

        Ok(SocialGraph::from_parts(users, friendships))
    }

    /// Read from any pair of readers into a SocialGraph.
    pub fn read_from(users: impl BufRead, friendships: impl BufRead) -> SocialResult<SocialGraph> {
        let users = Self::read_users(users, "users")?;
        let friendships = Self::read_friendships(friendships)?;
        Ok(SocialGraph::from_parts(users, friendships))
    }

    /// Parse user records. Any malformed record fails the whole read.
    ///
    /// `source` names the input in error messages.
    pub fn read_users(reader: impl BufRead, source: &str) -> SocialResult<Vec<User>> {
        let mut users = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            users.push(parse_user_record(line).map_err(|reason| SocialError::MalformedRecord {
                file: source.to_string(),
                line: i + 1,
                reason,
            })?);
        }
        Ok(users)
    }

    /// Parse friendship records. Records are not checked against the users;
    /// a missing second id is kept as empty and dropped when the graph is built.
    pub fn read_friendships(reader: impl BufRead) -> SocialResult<Vec<Friendship>> {
        let mut friendships = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split(',');
            let a = fields.next().unwrap_or_default();
            let b = fields.next().unwrap_or_default();
            friendships.push(Friendship::new(a, b));
        }
        Ok(friendships)
    }
}

fn parse_user_record(line: &str) -> Result<User, String> {
    let fields: Vec<&str> = line.splitn(6, ',').collect();
    if fields.len() < 5 {
        return Err(format!("expected 5 fields, found {}", fields.len()));
    }

    let age: i32 = fields[2]
        .trim()
        .parse()
        .map_err(|_| format!("invalid age {:?}", fields[2]))?;
    let activity_rate: f64 = fields[4]
        .trim()
        .parse()
        .map_err(|_| format!("invalid activity rate {:?}", fields[4]))?;

    Ok(User::new(fields[0], fields[1], age, fields[3], activity_rate))
}
