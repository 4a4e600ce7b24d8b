// Services - the corpus pipeline built on top of the graph snapshot

pub mod corpus_exporter;
pub mod corpus_filter;
pub mod word_cloud_service;

pub use corpus_exporter::{Corpus, CorpusExporter, CORPUS_SEPARATOR};
pub use corpus_filter::{CorpusFilter, CorpusFilterEngine};
pub use word_cloud_service::{CloudReport, WordCloudService};
