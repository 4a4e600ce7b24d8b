// Derived indexes over a graph snapshot
// Rebuilt from scratch whenever the snapshot changes; never mutated in place

pub mod attribute_index;
pub mod keyword_index;
pub mod tokenizer;

pub use attribute_index::AttributeIndex;
pub use keyword_index::KeywordIndex;
