//! In-memory graph store and traversal.

pub mod builder;
pub mod social_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use social_graph::SocialGraph;
pub use traversal::{bfs_distance, bfs_levels, component_of};
