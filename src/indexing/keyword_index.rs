use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use crate::core::PostId;
use crate::indexing::tokenizer::{distinct_tokens, normalize_keyword};
use crate::models::Post;

/// Lowercase token -> posts whose content contains that token.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    postings: HashMap<String, BTreeSet<PostId>>,
}

impl KeywordIndex {
    /// Index every post. Each post lands at most once under each of its tokens.
    pub fn build(posts: &[Post]) -> Self {
        let mut postings: HashMap<String, BTreeSet<PostId>> = HashMap::new();
        for post in posts {
            for token in distinct_tokens(post.content()) {
                postings.entry(token).or_default().insert(post.id());
            }
        }

        debug!(posts = posts.len(), words = postings.len(), "built keyword index");
        Self { postings }
    }

    /// Posts containing `keyword` as an exact token, ignoring case.
    pub fn posts_for(&self, keyword: &str) -> Option<&BTreeSet<PostId>> {
        self.postings.get(&normalize_keyword(keyword))
    }

    /// Union of the posts matching any of `keywords`. Unknown keywords
    /// contribute nothing.
    pub fn posts_matching_any<I, S>(&self, keywords: I) -> BTreeSet<PostId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matched = BTreeSet::new();
        for keyword in keywords {
            if let Some(posts) = self.posts_for(keyword.as_ref()) {
                matched.extend(posts.iter().copied());
            }
        }
        matched
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
