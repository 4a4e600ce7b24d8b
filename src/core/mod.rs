// Core types and primitives

pub mod strong_types;

// Re-export commonly used types
pub use strong_types::{AttributeName, ConnectionType, PostId, Username};
