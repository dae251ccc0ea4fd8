//! Record file input for network data.

pub mod reader;

pub use reader::NetworkReader;
