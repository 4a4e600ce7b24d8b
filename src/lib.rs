// Social Corpus - filtered word-cloud corpora from a social network snapshot

// Core types and primitives
pub mod core;

// Entity records and the in-memory graph that owns them
pub mod models;
pub mod graph;

// Derived keyword and attribute indexes
pub mod indexing;

// Filter, export and pipeline services
pub mod services;

// Renderer boundary
pub mod render;

// Common utilities
pub mod config;
pub mod error;
pub mod monitoring;
pub mod data_seeder;

// Re-exports for convenience
pub use error::{AppError, AppResult};
pub use graph::SocialGraph;
pub use services::{CorpusFilter, WordCloudService};
