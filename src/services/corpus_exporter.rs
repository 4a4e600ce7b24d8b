// Corpus Exporter - joins filtered post contents into one text blob

use serde::{Deserialize, Serialize};

use crate::core::PostId;
use crate::graph::SocialGraph;

pub const CORPUS_SEPARATOR: &str = " ";

/// The text handed to the renderer, with the posts it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub posts: Vec<PostId>,
    pub text: String,
}

impl Corpus {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub struct CorpusExporter;

impl CorpusExporter {
    /// Concatenate the contents of `posts`, in the given order, separated by
    /// a single space. Ids missing from `graph` are skipped.
    pub fn export(graph: &SocialGraph, posts: &[PostId]) -> Corpus {
        let mut included = Vec::with_capacity(posts.len());
        let mut contents = Vec::with_capacity(posts.len());
        for &id in posts {
            if let Some(post) = graph.post(id) {
                included.push(id);
                contents.push(post.content());
            }
        }

        Corpus {
            posts: included,
            text: contents.join(CORPUS_SEPARATOR),
        }
    }
}
