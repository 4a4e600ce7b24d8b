// Corpus Filter Engine - selects the posts that feed the corpus
// Set algebra over the keyword and attribute indexes

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, instrument};

use crate::core::{AttributeName, PostId, Username};
use crate::graph::SocialGraph;
use crate::indexing::{AttributeIndex, KeywordIndex};

/// Independent, optional filter stages. An empty field leaves its stage inactive.
///
/// `include` keeps posts containing at least one of its keywords; `exclude`
/// drops posts containing any of its keywords; `attributes` keeps posts whose
/// author matches every recognized `name -> value` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusFilter {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl CorpusFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, keyword: impl Into<String>) -> Self {
        self.include.push(keyword.into());
        self
    }

    pub fn exclude(mut self, keyword: impl Into<String>) -> Self {
        self.exclude.push(keyword.into());
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty() && self.attributes.is_empty()
    }
}

/// Evaluates a [`CorpusFilter`] against one graph snapshot and the indexes
/// built from it.
pub struct CorpusFilterEngine<'a> {
    graph: &'a SocialGraph,
    keywords: &'a KeywordIndex,
    attributes: &'a AttributeIndex,
}

impl<'a> CorpusFilterEngine<'a> {
    pub fn new(graph: &'a SocialGraph, keywords: &'a KeywordIndex, attributes: &'a AttributeIndex) -> Self {
        Self {
            graph,
            keywords,
            attributes,
        }
    }

    /// Posts passing every active stage, in the graph's publish order.
    #[instrument(skip(self))]
    pub fn apply(&self, filter: &CorpusFilter) -> Vec<PostId> {
        let mut candidates: BTreeSet<PostId> = self.graph.posts().iter().map(|p| p.id()).collect();
        debug!(candidates = candidates.len(), "starting corpus filter");

        if !filter.attributes.is_empty() {
            let authored = self.posts_by_matching_authors(&filter.attributes);
            candidates.retain(|id| authored.contains(id));
            debug!(candidates = candidates.len(), "applied attribute filter");
        }

        if !filter.include.is_empty() {
            let included = self.keywords.posts_matching_any(&filter.include);
            candidates.retain(|id| included.contains(id));
            debug!(candidates = candidates.len(), "applied include filter");
        }

        if !filter.exclude.is_empty() {
            let excluded = self.keywords.posts_matching_any(&filter.exclude);
            candidates.retain(|id| !excluded.contains(id));
            debug!(candidates = candidates.len(), "applied exclude filter");
        }

        self.graph
            .posts()
            .iter()
            .map(|p| p.id())
            .filter(|id| candidates.contains(id))
            .collect()
    }

    /// Posts uploaded by users matching every recognized attribute pair.
    fn posts_by_matching_authors(&self, required: &BTreeMap<String, String>) -> BTreeSet<PostId> {
        let mut users: BTreeSet<Username> =
            self.graph.users().iter().map(|u| u.username().clone()).collect();

        for (name, value) in required {
            let name = match name.parse::<AttributeName>() {
                Ok(name) => name,
                Err(_) => {
                    debug!(attribute = %name, "ignoring unrecognized attribute filter");
                    continue;
                }
            };
            match self.attributes.users_with(name, value) {
                Some(bucket) => users.retain(|u| bucket.contains(u)),
                None => users.clear(),
            }
        }

        users
            .iter()
            .filter_map(|username| self.graph.user(username))
            .flat_map(|user| user.uploads().iter().copied())
            .collect()
    }
}
